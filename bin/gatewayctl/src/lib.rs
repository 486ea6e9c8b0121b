//! `gatewayctl`: offline tooling for token gateway deployments.
//!
//! Predicts factory deployment addresses, encodes constructor arguments, inspects template
//! registry files and builds gateway calldata without talking to a chain.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod cmd;
pub use cmd::*;

pub mod calldata;
pub mod common;
pub mod encode;
pub mod logging;
pub mod predict;
pub mod templates;
