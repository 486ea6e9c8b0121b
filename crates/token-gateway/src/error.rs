//! Error types for deployment, authorization and relayed asset operations.
//!
//! Every error aborts the operation that raised it. No state is changed on any error path and
//! nothing is retried inside the crate: each variant carries the parameters of the failed call so
//! the caller can adjust and resubmit.

use alloy_primitives::{Address, U256};

use crate::{ParamType, Salt, TemplateKind};

/// Errors raised while encoding constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The number of values does not match the template's parameter list.
    #[error("expected {expected} constructor arguments, got {actual}")]
    ArityMismatch {
        /// Number of parameters the template declares
        expected: usize,
        /// Number of values supplied by the caller
        actual: usize,
    },
    /// A value's variant does not match the declared parameter type.
    #[error("argument {index}: expected {expected}, got {found}")]
    TypeMismatch {
        /// Position of the offending argument
        index: usize,
        /// Declared parameter type
        expected: ParamType,
        /// Kind of the supplied value
        found: &'static str,
    },
    /// An integer does not fit the declared width.
    #[error("argument {index}: value {value} does not fit in {ty}")]
    ValueOutOfRange {
        /// Position of the offending argument
        index: usize,
        /// Declared parameter type
        ty: ParamType,
        /// The supplied value
        value: U256,
    },
    /// The parameter type name is not one of the supported types.
    #[error("unsupported parameter type `{0}`")]
    UnknownType(String),
    /// A textual value could not be parsed as the declared type.
    #[error("invalid {ty} value `{value}`")]
    InvalidValue {
        /// Declared parameter type
        ty: ParamType,
        /// The text that failed to parse
        value: String,
    },
}

/// Errors raised while building a [`TemplateRegistry`](crate::TemplateRegistry).
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// A template with this name is already registered. Templates are immutable.
    #[error("template `{0}` is already registered")]
    AlreadyRegistered(String),
    /// The template has no code.
    #[error("template `{0}` has empty bytecode")]
    EmptyCode(String),
    /// The template kind name is not recognized.
    #[error("unknown template kind `{0}`")]
    UnknownKind(String),
    /// Failed to parse the registry file.
    #[error("invalid template registry: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to read the registry file.
    #[error("failed to read template registry: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a factory deployment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeployError {
    /// The template name is not registered with the factory.
    #[error("unknown template `{0}`")]
    UnknownTemplate(String),
    /// The constructor arguments do not match the template's parameter list.
    #[error("failed to encode arguments for `{template}`: {source}")]
    Encoding {
        /// Template being deployed
        template: String,
        /// The underlying encoding failure
        #[source]
        source: EncodingError,
    },
    /// The CREATE2 address is already occupied.
    #[error("salt {salt} collides with existing contract at {address}")]
    SaltCollision {
        /// The occupied address
        address: Address,
        /// The salt that produced it
        salt: Salt,
    },
    /// The arguments name a gateway other than the one the factory is bound to.
    #[error("factory is bound to gateway {expected}, arguments name {found}")]
    GatewayMismatch {
        /// The factory's gateway
        expected: Address,
        /// The gateway in the constructor arguments
        found: Address,
    },
    /// No factory is deployed at the given address.
    #[error("no factory at {0}")]
    UnknownFactory(Address),
    /// A plain CREATE deployment landed on an occupied address.
    #[error("address {0} is already occupied")]
    AddressOccupied(Address),
    /// The gateway a factory is bound to could not be created or found.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// The asset constructor rejected its arguments.
    #[error("constructor of `{template}` reverted: {source}")]
    Constructor {
        /// Template being deployed
        template: String,
        /// The asset's own validation failure
        #[source]
        source: AssetError,
    },
}

/// The role a call required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Role {
    /// The gateway admin.
    #[display("admin")]
    Admin,
    /// A member of the gateway's manager set.
    #[display("manager")]
    Manager,
}

/// Errors raised by the gateway and its relay surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The caller does not hold the required role.
    #[error("{caller} is not the gateway {required}")]
    Unauthorized {
        /// The rejected caller
        caller: Address,
        /// The role the operation requires
        required: Role,
    },
    /// The admin cannot be the null identity.
    #[error("admin cannot be the zero address")]
    InvalidAdmin,
    /// No gateway is deployed at the given address.
    #[error("no gateway at {0}")]
    UnknownGateway(Address),
    /// The relay target hosts no asset.
    #[error("no asset at {0}")]
    NoContract(Address),
    /// The target asset rejected the forwarded call.
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Errors raised by a deployed asset's own validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    /// A privileged entry point was called by something other than the bound gateway.
    #[error("caller {caller} is not the bound gateway")]
    NotGateway {
        /// The rejected caller
        caller: Address,
    },
    /// The gateway bound at construction is the zero address.
    #[error("gateway cannot be the zero address")]
    InvalidGateway,
    /// The new owner is the zero address.
    #[error("owner cannot be the zero address")]
    InvalidOwner,
    /// Tokens cannot be minted to the zero address.
    #[error("mint to the zero address")]
    MintToZeroAddress,
    /// The token id already has an owner.
    #[error("token {0} already minted")]
    TokenAlreadyMinted(U256),
    /// Batch ids and amounts differ in length.
    #[error("ids and amounts length mismatch: {ids} != {amounts}")]
    LengthMismatch {
        /// Number of ids
        ids: usize,
        /// Number of amounts
        amounts: usize,
    },
    /// A capped token's supply would exceed its cap.
    #[error("cap exceeded: supply {supply} + {amount} > cap {cap}")]
    CapExceeded {
        /// The token cap
        cap: U256,
        /// Supply before the mint
        supply: U256,
        /// Requested amount
        amount: U256,
    },
    /// A capped token was constructed with a zero cap.
    #[error("cap is 0")]
    ZeroCap,
    /// A balance or supply would overflow 256 bits.
    #[error("arithmetic overflow")]
    Overflow,
    /// The asset does not expose the requested privileged entry point.
    #[error("{template} does not support {operation}")]
    UnsupportedOperation {
        /// The relayed operation
        operation: &'static str,
        /// The asset's template kind
        template: TemplateKind,
    },
}
