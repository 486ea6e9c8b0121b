use std::collections::{BTreeMap, HashMap};

use alloy_primitives::{Address, U256};

use super::OperatorFilter;
use crate::AssetError;

/// State of a `BasicERC721` collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc721 {
    name: String,
    symbol: String,
    base_uri: String,
    operator_filter: OperatorFilter,
    owners: BTreeMap<U256, Address>,
    balances: HashMap<Address, U256>,
    /// Last id handed out by an auto-increment mint.
    next_token_id: U256,
}

impl Erc721 {
    pub(crate) fn new(
        name: String,
        symbol: String,
        base_uri: String,
        operator_filter: OperatorFilter,
    ) -> Self {
        Self {
            name,
            symbol,
            base_uri,
            operator_filter,
            owners: BTreeMap::new(),
            balances: HashMap::new(),
            next_token_id: U256::ZERO,
        }
    }

    /// Collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collection symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The operator-filter configuration given at construction.
    pub const fn operator_filter(&self) -> &OperatorFilter {
        &self.operator_filter
    }

    /// Owner of `token_id`, if minted.
    pub fn owner_of(&self, token_id: U256) -> Option<Address> {
        self.owners.get(&token_id).copied()
    }

    /// Number of tokens held by `owner`.
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).copied().unwrap_or_default()
    }

    /// Number of minted tokens.
    pub fn total_supply(&self) -> usize {
        self.owners.len()
    }

    /// `base_uri ++ decimal(token_id)`, if minted.
    pub fn token_uri(&self, token_id: U256) -> Option<String> {
        self.owners.contains_key(&token_id).then(|| format!("{}{token_id}", self.base_uri))
    }

    /// Mints `token_id` to `to`. A zero id takes the next id that is not minted yet.
    pub(crate) fn mint(&mut self, to: Address, token_id: U256) -> Result<U256, AssetError> {
        if to.is_zero() {
            return Err(AssetError::MintToZeroAddress);
        }
        let (token_id, next_token_id) = if token_id.is_zero() {
            let token_id = self.next_free_id()?;
            (token_id, token_id)
        } else {
            (token_id, self.next_token_id)
        };
        if self.owners.contains_key(&token_id) {
            return Err(AssetError::TokenAlreadyMinted(token_id));
        }
        let balance = self.balance_of(to).checked_add(U256::from(1)).ok_or(AssetError::Overflow)?;

        self.next_token_id = next_token_id;
        self.owners.insert(token_id, to);
        self.balances.insert(to, balance);
        Ok(token_id)
    }

    fn next_free_id(&self) -> Result<U256, AssetError> {
        let mut token_id = self.next_token_id;
        loop {
            token_id = token_id.checked_add(U256::from(1)).ok_or(AssetError::Overflow)?;
            if !self.owners.contains_key(&token_id) {
                return Ok(token_id);
            }
        }
    }
}
