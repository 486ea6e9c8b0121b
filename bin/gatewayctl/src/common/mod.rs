//! Helpers shared by the gatewayctl subcommands.

mod args;
mod error;
mod hex;
mod registry;

pub use args::*;
pub use error::*;
pub use hex::*;
pub use registry::*;
