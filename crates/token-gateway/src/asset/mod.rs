//! Token contracts created by factories.
//!
//! A deployed asset keeps the gateway address it was constructed with and accepts privileged
//! calls only from that address. It never stores who the gateway's managers are; the relay
//! consults the live gateway state for that, so changes to the manager set apply to every asset
//! at once.

mod erc1155;
mod erc20;
mod erc721;

pub use erc1155::*;
pub use erc20::*;
pub use erc721::*;

use alloy_primitives::Address;

use crate::{AssetError, RelayCall, RelayOutcome, TemplateArgs, TemplateKind};

/// Operator-filter registry settings passed to the NFT constructors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperatorFilter {
    /// Registrant to subscribe to or copy from; zero for none.
    pub registrant: Address,
    /// Whether to subscribe rather than copy.
    pub subscribe: bool,
}

/// Kind-specific asset state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Non-fungible collection.
    Erc721(Erc721),
    /// Multi-token collection.
    Erc1155(Erc1155),
    /// Fungible token, optionally capped.
    Erc20(Erc20),
}

/// A contract instance created by a factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedAsset {
    address: Address,
    template: String,
    kind: TemplateKind,
    gateway: Address,
    owner: Address,
    token: Token,
}

impl DeployedAsset {
    /// Runs the constructor of `kind`.
    ///
    /// The NFT templates take their owner as an argument; the fungible templates are handed to
    /// `deployer`, the account that asked the factory for the deployment.
    pub(crate) fn construct(
        address: Address,
        template: &str,
        deployer: Address,
        args: TemplateArgs,
    ) -> Result<Self, AssetError> {
        let gateway = args.gateway();
        if gateway.is_zero() {
            return Err(AssetError::InvalidGateway);
        }
        let (kind, owner, token) = match args {
            TemplateArgs::BasicErc721(args) => (
                TemplateKind::BasicErc721,
                args.owner,
                Token::Erc721(Erc721::new(
                    args.name,
                    args.symbol,
                    args.base_uri,
                    OperatorFilter {
                        registrant: args.operator_filter_registrant,
                        subscribe: args.subscribe,
                    },
                )),
            ),
            TemplateArgs::BasicErc1155(args) => (
                TemplateKind::BasicErc1155,
                args.owner,
                Token::Erc1155(Erc1155::new(
                    args.uri,
                    OperatorFilter {
                        registrant: args.operator_filter_registrant,
                        subscribe: args.subscribe,
                    },
                )),
            ),
            TemplateArgs::BasicErc20(args) => (
                TemplateKind::BasicErc20,
                deployer,
                Token::Erc20(Erc20::new(args.name, args.symbol, args.decimals)),
            ),
            TemplateArgs::BasicErc20Capped(args) => (
                TemplateKind::BasicErc20Capped,
                deployer,
                Token::Erc20(Erc20::capped(args.name, args.symbol, args.decimals, args.cap)?),
            ),
        };
        if owner.is_zero() {
            return Err(AssetError::InvalidOwner);
        }
        Ok(Self { address, template: template.to_string(), kind, gateway, owner, token })
    }

    /// The asset's address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Name of the template the asset was deployed from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Kind of the template the asset was deployed from.
    pub const fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// The gateway bound at construction.
    pub const fn gateway(&self) -> Address {
        self.gateway
    }

    /// Current owner.
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Kind-specific state.
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// The collection state, if this is an ERC721 asset.
    pub const fn as_erc721(&self) -> Option<&Erc721> {
        match &self.token {
            Token::Erc721(token) => Some(token),
            _ => None,
        }
    }

    /// The collection state, if this is an ERC1155 asset.
    pub const fn as_erc1155(&self) -> Option<&Erc1155> {
        match &self.token {
            Token::Erc1155(token) => Some(token),
            _ => None,
        }
    }

    /// The token state, if this is an ERC20 asset.
    pub const fn as_erc20(&self) -> Option<&Erc20> {
        match &self.token {
            Token::Erc20(token) => Some(token),
            _ => None,
        }
    }

    /// Privileged entry point. Applies `call` entirely or not at all.
    ///
    /// Single operations validate before they write; batches run against a staged copy.
    pub(crate) fn execute(
        &mut self,
        caller: Address,
        call: &RelayCall,
    ) -> Result<RelayOutcome, AssetError> {
        if caller != self.gateway {
            return Err(AssetError::NotGateway { caller });
        }
        if !call.is_batch() {
            return self.apply(call);
        }
        let mut staged = self.clone();
        let outcome = staged.apply(call)?;
        *self = staged;
        Ok(outcome)
    }

    fn apply(&mut self, call: &RelayCall) -> Result<RelayOutcome, AssetError> {
        match (call, &mut self.token) {
            (RelayCall::ResetOwner { new_owner }, _) => {
                if new_owner.is_zero() {
                    return Err(AssetError::InvalidOwner);
                }
                let previous = core::mem::replace(&mut self.owner, *new_owner);
                Ok(RelayOutcome::OwnerReset { previous, new_owner: *new_owner })
            }
            (RelayCall::Erc721Mint { recipient, token_id }, Token::Erc721(token)) => {
                let token_id = token.mint(*recipient, *token_id)?;
                Ok(RelayOutcome::Minted { token_ids: vec![token_id] })
            }
            (RelayCall::Erc721MintBatch { recipient, token_ids }, Token::Erc721(token)) => {
                let token_ids = token_ids
                    .iter()
                    .map(|token_id| token.mint(*recipient, *token_id))
                    .collect::<Result<_, _>>()?;
                Ok(RelayOutcome::Minted { token_ids })
            }
            (RelayCall::Erc1155Mint { to, id, amount, .. }, Token::Erc1155(token)) => {
                token.mint(*to, *id, *amount)?;
                Ok(RelayOutcome::Minted { token_ids: vec![*id] })
            }
            (RelayCall::Erc1155MintBatch { to, ids, amounts, .. }, Token::Erc1155(token)) => {
                token.mint_batch(*to, ids, amounts)?;
                Ok(RelayOutcome::Minted { token_ids: ids.clone() })
            }
            (RelayCall::Erc20Mint { recipient, amount }, Token::Erc20(token)) => {
                token.mint(*recipient, *amount)?;
                Ok(RelayOutcome::Issued { amount: *amount })
            }
            (call, _) => Err(AssetError::UnsupportedOperation {
                operation: call.name(),
                template: self.kind,
            }),
        }
    }
}
