//! Constants for deterministic deployment.

/// The byte prepended to a CREATE2 address preimage, see EIP-1014.
pub const CREATE2_PREFIX: u8 = 0xff;

/// Template names registered by the stock factories.
pub mod templates {
    /// The basic non-fungible collection.
    pub const BASIC_ERC721: &str = "BasicERC721";
    /// The basic multi-token collection.
    pub const BASIC_ERC1155: &str = "BasicERC1155";
    /// The basic fungible token.
    pub const BASIC_ERC20: &str = "BasicERC20";
    /// The capped fungible token.
    pub const BASIC_ERC20_CAPPED: &str = "BasicERC20Capped";
}
