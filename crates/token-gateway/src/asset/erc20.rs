use std::collections::HashMap;

use alloy_primitives::{Address, U256};

use crate::AssetError;

/// State of a `BasicERC20` or `BasicERC20Capped` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc20 {
    name: String,
    symbol: String,
    decimals: u8,
    cap: Option<U256>,
    total_supply: U256,
    balances: HashMap<Address, U256>,
}

impl Erc20 {
    pub(crate) fn new(name: String, symbol: String, decimals: u8) -> Self {
        Self {
            name,
            symbol,
            decimals,
            cap: None,
            total_supply: U256::ZERO,
            balances: HashMap::new(),
        }
    }

    pub(crate) fn capped(
        name: String,
        symbol: String,
        decimals: u8,
        cap: U256,
    ) -> Result<Self, AssetError> {
        if cap.is_zero() {
            return Err(AssetError::ZeroCap);
        }
        Ok(Self { cap: Some(cap), ..Self::new(name, symbol, decimals) })
    }

    /// Token name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Display decimals.
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Supply cap, if the token is capped.
    pub const fn cap(&self) -> Option<U256> {
        self.cap
    }

    /// Total minted supply.
    pub const fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Balance of `account`.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    pub(crate) fn mint(&mut self, to: Address, amount: U256) -> Result<(), AssetError> {
        if to.is_zero() {
            return Err(AssetError::MintToZeroAddress);
        }
        let supply = self.total_supply.checked_add(amount).ok_or(AssetError::Overflow)?;
        if let Some(cap) = self.cap {
            if supply > cap {
                return Err(AssetError::CapExceeded { cap, supply: self.total_supply, amount });
            }
        }
        let balance = self.balance_of(to).checked_add(amount).ok_or(AssetError::Overflow)?;
        self.balances.insert(to, balance);
        self.total_supply = supply;
        Ok(())
    }
}
