//! Gateway calldata builder.
//!
//! Produces the ABI calldata a manager or the admin submits to the gateway contract on a real
//! chain. Relay operations go through [`RelayCall::calldata`] so the encoding matches what the
//! library relays in memory.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use clap::{Parser, Subcommand};
use token_gateway::{interfaces::ITokenGateway, RelayCall};

use crate::common::{load_hex, Result};

/// Build gateway calldata
#[derive(Parser, Debug)]
pub struct Cmd {
    /// The gateway function to call
    #[command(subcommand)]
    pub call: GatewayCall,
}

/// A gateway function call.
#[derive(Subcommand, Debug, Clone)]
pub enum GatewayCall {
    /// `addManager(address)`
    AddManager {
        /// Identity to add
        manager: Address,
    },
    /// `removeManager(address)`
    RemoveManager {
        /// Identity to remove
        manager: Address,
    },
    /// `transferGatewayOwnership(address)`
    TransferAdmin {
        /// The new admin
        new_admin: Address,
    },
    /// `ERC721_mint(address,address,uint256)`
    Erc721Mint {
        /// Target collection
        #[arg(long)]
        target: Address,
        /// Token recipient
        #[arg(long)]
        recipient: Address,
        /// Token id; zero takes the next free id
        #[arg(long, default_value = "0")]
        token_id: U256,
    },
    /// `ERC721_mintBatch(address,address,uint256[])`
    Erc721MintBatch {
        /// Target collection
        #[arg(long)]
        target: Address,
        /// Token recipient
        #[arg(long)]
        recipient: Address,
        /// Comma-separated token ids
        #[arg(long, value_delimiter = ',')]
        token_ids: Vec<U256>,
    },
    /// `ERC1155_mint(address,address,uint256,uint256,bytes)`
    Erc1155Mint {
        /// Target collection
        #[arg(long)]
        target: Address,
        /// Token recipient
        #[arg(long)]
        to: Address,
        /// Token id
        #[arg(long)]
        id: U256,
        /// Amount to mint
        #[arg(long)]
        amount: U256,
        /// Hex data forwarded to the receiver
        #[arg(long)]
        data: Option<String>,
    },
    /// `ERC1155_mintBatch(address,address,uint256[],uint256[],bytes)`
    Erc1155MintBatch {
        /// Target collection
        #[arg(long)]
        target: Address,
        /// Token recipient
        #[arg(long)]
        to: Address,
        /// Comma-separated token ids
        #[arg(long, value_delimiter = ',')]
        ids: Vec<U256>,
        /// Comma-separated amounts, one per id
        #[arg(long, value_delimiter = ',')]
        amounts: Vec<U256>,
        /// Hex data forwarded to the receiver
        #[arg(long)]
        data: Option<String>,
    },
    /// `ERC20_mint(address,address,uint256)`
    Erc20Mint {
        /// Target token
        #[arg(long)]
        target: Address,
        /// Token recipient
        #[arg(long)]
        recipient: Address,
        /// Amount to mint
        #[arg(long)]
        amount: U256,
    },
    /// `resetOwner(address,address)`
    ResetOwner {
        /// Target asset
        #[arg(long)]
        target: Address,
        /// The new owner
        #[arg(long)]
        new_owner: Address,
    },
}

impl GatewayCall {
    /// ABI calldata of the call.
    pub fn calldata(&self) -> Result<Bytes> {
        let (target, call) = match self.clone() {
            Self::AddManager { manager } => {
                return Ok(ITokenGateway::addManagerCall { manager }.abi_encode().into())
            }
            Self::RemoveManager { manager } => {
                return Ok(ITokenGateway::removeManagerCall { manager }.abi_encode().into())
            }
            Self::TransferAdmin { new_admin } => {
                let call = ITokenGateway::transferGatewayOwnershipCall { newAdmin: new_admin };
                return Ok(call.abi_encode().into());
            }
            Self::Erc721Mint { target, recipient, token_id } => {
                (target, RelayCall::Erc721Mint { recipient, token_id })
            }
            Self::Erc721MintBatch { target, recipient, token_ids } => {
                (target, RelayCall::Erc721MintBatch { recipient, token_ids })
            }
            Self::Erc1155Mint { target, to, id, amount, data } => {
                let data = load_hex(data.as_deref(), None)?.unwrap_or_default();
                (target, RelayCall::Erc1155Mint { to, id, amount, data })
            }
            Self::Erc1155MintBatch { target, to, ids, amounts, data } => {
                let data = load_hex(data.as_deref(), None)?.unwrap_or_default();
                (target, RelayCall::Erc1155MintBatch { to, ids, amounts, data })
            }
            Self::Erc20Mint { target, recipient, amount } => {
                (target, RelayCall::Erc20Mint { recipient, amount })
            }
            Self::ResetOwner { target, new_owner } => (target, RelayCall::ResetOwner { new_owner }),
        };
        Ok(call.calldata(target))
    }
}

impl Cmd {
    /// Execute the calldata command and render its output.
    pub fn execute(&self) -> Result<String> {
        Ok(self.call.calldata()?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    fn calldata(args: &[&str]) -> Bytes {
        let argv = std::iter::once("calldata").chain(args.iter().copied());
        Cmd::try_parse_from(argv).unwrap().call.calldata().unwrap()
    }

    #[test]
    fn test_add_manager() {
        let data = calldata(&["add-manager", "0xb000000000000000000000000000000000000001"]);
        let decoded = ITokenGateway::addManagerCall::abi_decode(&data, true).unwrap();
        assert_eq!(decoded.manager, address!("b000000000000000000000000000000000000001"));
    }

    #[test]
    fn test_erc721_batch() {
        let data = calldata(&[
            "erc721-mint-batch",
            "--target",
            "0x3000000000000000000000000000000000000003",
            "--recipient",
            "0x1000000000000000000000000000000000000002",
            "--token-ids",
            "0,224,223",
        ]);
        let decoded = ITokenGateway::ERC721_mintBatchCall::abi_decode(&data, true).unwrap();
        assert_eq!(decoded.nftContract, address!("3000000000000000000000000000000000000003"));
        assert_eq!(decoded.tokenIds, vec![U256::ZERO, U256::from(224), U256::from(223)]);
    }

    #[test]
    fn test_erc1155_mint_data() {
        let data = calldata(&[
            "erc1155-mint",
            "--target",
            "0x3000000000000000000000000000000000000003",
            "--to",
            "0x1000000000000000000000000000000000000002",
            "--id",
            "7",
            "--amount",
            "10",
            "--data",
            "0xbeef",
        ]);
        let decoded = ITokenGateway::ERC1155_mintCall::abi_decode(&data, true).unwrap();
        assert_eq!(decoded.amount, U256::from(10));
        assert_eq!(decoded.data.as_ref(), &[0xbe, 0xef]);
    }

    #[test]
    fn test_relay_calls_match_library() {
        let target = address!("3000000000000000000000000000000000000003");
        let new_owner = address!("1000000000000000000000000000000000000002");
        let call = GatewayCall::ResetOwner { target, new_owner };
        assert_eq!(call.calldata().unwrap(), RelayCall::ResetOwner { new_owner }.calldata(target));
    }
}
