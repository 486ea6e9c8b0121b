use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use super::OperatorFilter;
use crate::AssetError;

/// State of a `BasicERC1155` collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc1155 {
    uri: String,
    operator_filter: OperatorFilter,
    balances: HashMap<(Address, U256), U256>,
}

impl Erc1155 {
    pub(crate) fn new(uri: String, operator_filter: OperatorFilter) -> Self {
        Self { uri, operator_filter, balances: HashMap::new() }
    }

    /// Metadata URI template.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The operator-filter configuration given at construction.
    pub const fn operator_filter(&self) -> &OperatorFilter {
        &self.operator_filter
    }

    /// Balance of `account` for token `id`.
    pub fn balance_of(&self, account: Address, id: U256) -> U256 {
        self.balances.get(&(account, id)).copied().unwrap_or_default()
    }

    pub(crate) fn mint(&mut self, to: Address, id: U256, amount: U256) -> Result<(), AssetError> {
        if to.is_zero() {
            return Err(AssetError::MintToZeroAddress);
        }
        let balance = self.balance_of(to, id).checked_add(amount).ok_or(AssetError::Overflow)?;
        self.balances.insert((to, id), balance);
        Ok(())
    }

    /// Mints every `(id, amount)` pair to `to`. The caller discards `self` on error.
    pub(crate) fn mint_batch(
        &mut self,
        to: Address,
        ids: &[U256],
        amounts: &[U256],
    ) -> Result<(), AssetError> {
        if ids.len() != amounts.len() {
            return Err(AssetError::LengthMismatch { ids: ids.len(), amounts: amounts.len() });
        }
        ids.iter().zip(amounts).try_for_each(|(id, amount)| self.mint(to, *id, *amount))
    }
}
