//! Privileged operations the gateway forwards to deployed assets.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use tracing::trace;

use crate::{interfaces::ITokenGateway, AuthorizationCheck, DeployedAsset, GatewayError};

/// A privileged operation on a deployed asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayCall {
    /// Mint one ERC721 token. A zero `token_id` takes the next free id.
    Erc721Mint {
        /// Recipient of the token
        recipient: Address,
        /// Token id, or zero
        token_id: U256,
    },
    /// Mint several ERC721 tokens to one recipient.
    Erc721MintBatch {
        /// Recipient of the tokens
        recipient: Address,
        /// Token ids; zeros take the next free id
        token_ids: Vec<U256>,
    },
    /// Mint `amount` of ERC1155 token `id`.
    Erc1155Mint {
        /// Recipient of the tokens
        to: Address,
        /// Token id
        id: U256,
        /// Amount to mint
        amount: U256,
        /// Opaque data forwarded to the receiver hook
        data: Bytes,
    },
    /// Mint several ERC1155 ids in one call.
    Erc1155MintBatch {
        /// Recipient of the tokens
        to: Address,
        /// Token ids
        ids: Vec<U256>,
        /// Amounts, one per id
        amounts: Vec<U256>,
        /// Opaque data forwarded to the receiver hook
        data: Bytes,
    },
    /// Mint fungible tokens.
    Erc20Mint {
        /// Recipient of the tokens
        recipient: Address,
        /// Amount to mint
        amount: U256,
    },
    /// Hand the asset's ownership to `new_owner`.
    ResetOwner {
        /// The new owner
        new_owner: Address,
    },
}

impl RelayCall {
    /// The gateway function name of the operation.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Erc721Mint { .. } => "ERC721_mint",
            Self::Erc721MintBatch { .. } => "ERC721_mintBatch",
            Self::Erc1155Mint { .. } => "ERC1155_mint",
            Self::Erc1155MintBatch { .. } => "ERC1155_mintBatch",
            Self::Erc20Mint { .. } => "ERC20_mint",
            Self::ResetOwner { .. } => "resetOwner",
        }
    }

    /// Whether the operation touches several items at once.
    pub const fn is_batch(&self) -> bool {
        matches!(self, Self::Erc721MintBatch { .. } | Self::Erc1155MintBatch { .. })
    }

    /// ABI calldata of the gateway call relaying this operation to `target`.
    pub fn calldata(&self, target: Address) -> Bytes {
        let data = match self.clone() {
            Self::Erc721Mint { recipient, token_id } => {
                ITokenGateway::ERC721_mintCall { nftContract: target, recipient, tokenId: token_id }
                    .abi_encode()
            }
            Self::Erc721MintBatch { recipient, token_ids } => {
                ITokenGateway::ERC721_mintBatchCall {
                    nftContract: target,
                    recipient,
                    tokenIds: token_ids,
                }
                .abi_encode()
            }
            Self::Erc1155Mint { to, id, amount, data } => ITokenGateway::ERC1155_mintCall {
                nftContract: target,
                account: to,
                id,
                amount,
                data,
            }
            .abi_encode(),
            Self::Erc1155MintBatch { to, ids, amounts, data } => {
                ITokenGateway::ERC1155_mintBatchCall { nftContract: target, to, ids, amounts, data }
                    .abi_encode()
            }
            Self::Erc20Mint { recipient, amount } => {
                ITokenGateway::ERC20_mintCall { erc20Contract: target, recipient, amount }
                    .abi_encode()
            }
            Self::ResetOwner { new_owner } => {
                ITokenGateway::resetOwnerCall { _contract: target, _newOwner: new_owner }
                    .abi_encode()
            }
        };
        data.into()
    }
}

/// The result of a successful relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Non-fungible or multi-token ids were minted.
    Minted {
        /// The minted ids, in call order
        token_ids: Vec<U256>,
    },
    /// Fungible tokens were minted.
    Issued {
        /// The minted amount
        amount: U256,
    },
    /// Ownership changed hands.
    OwnerReset {
        /// The owner before the call
        previous: Address,
        /// The owner after the call
        new_owner: Address,
    },
}

/// Forwards `call` from `caller` to `asset` through the gateway at `gateway`.
///
/// The caller must pass the gateway's manager check, evaluated against `auth` as it is now.
/// The asset then sees `gateway` as its caller and applies its own validation. Any failure
/// leaves the asset untouched.
pub fn relay<A>(
    auth: &A,
    gateway: Address,
    caller: Address,
    asset: &mut DeployedAsset,
    call: &RelayCall,
) -> Result<RelayOutcome, GatewayError>
where
    A: AuthorizationCheck + ?Sized,
{
    auth.ensure_manager(caller)?;
    trace!(target: "token_gateway::relay", %caller, target = %asset.address(), operation = call.name(), "Relaying call");
    Ok(asset.execute(gateway, call)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, hex};

    const TARGET: Address = address!("3000000000000000000000000000000000000003");
    const ALICE: Address = address!("1000000000000000000000000000000000000002");

    #[test]
    fn test_calldata_selectors() {
        let call = RelayCall::Erc20Mint { recipient: ALICE, amount: U256::from(100) };
        let data = call.calldata(TARGET);
        assert_eq!(&data[..4], ITokenGateway::ERC20_mintCall::SELECTOR.as_slice());
        assert_eq!(data.len(), 4 + 3 * 32);

        let decoded = ITokenGateway::ERC20_mintCall::abi_decode(&data, true).unwrap();
        assert_eq!(decoded.erc20Contract, TARGET);
        assert_eq!(decoded.recipient, ALICE);
        assert_eq!(decoded.amount, U256::from(100));
    }

    #[test]
    fn test_reset_owner_calldata() {
        let data = RelayCall::ResetOwner { new_owner: ALICE }.calldata(TARGET);
        // resetOwner(address,address)
        assert_eq!(&data[..4], &alloy_primitives::keccak256("resetOwner(address,address)")[..4]);
        assert_eq!(
            &data[4..],
            &hex!(
                "0000000000000000000000003000000000000000000000000000000000000003"
                "0000000000000000000000001000000000000000000000000000000000000002"
            )[..]
        );
    }

    #[test]
    fn test_batch_flag() {
        assert!(RelayCall::Erc721MintBatch { recipient: ALICE, token_ids: vec![] }.is_batch());
        assert!(!RelayCall::ResetOwner { new_owner: ALICE }.is_batch());
    }
}
