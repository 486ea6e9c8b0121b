use alloy_primitives::hex::FromHexError;
use token_gateway::{DeployError, EncodingError, TemplateError};

/// Error types for the gatewayctl subcommands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid hex string
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] FromHexError),

    /// Template registry could not be loaded
    #[error("Template registry error: {0}")]
    Template(#[from] TemplateError),

    /// Constructor arguments could not be encoded
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// The deployment could not be planned
    #[error("Deployment error: {0}")]
    Deploy(#[from] DeployError),

    /// Output could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for the gatewayctl commands
pub type Result<T> = std::result::Result<T, CliError>;
