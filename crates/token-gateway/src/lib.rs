//! Deterministic token deployment and gateway-relayed authorization.
//!
//! Factories deploy token templates at CREATE2 addresses that anyone can compute in advance with
//! [`predict`]. Every deployed asset is bound to one gateway, which keeps an admin and a set of
//! managers; only managers can relay privileged calls such as minting to the assets.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;
pub mod interfaces;

mod abi;
pub use abi::*;

mod args;
pub use args::*;

mod asset;
pub use asset::*;

mod create2;
pub use create2::*;

mod error;
pub use error::*;

mod factory;
pub use factory::*;

mod gateway;
pub use gateway::*;

mod relay;
pub use relay::*;

mod template;
pub use template::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

mod world;
pub use world::*;
