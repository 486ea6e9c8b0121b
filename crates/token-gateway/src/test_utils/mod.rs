//! Test utilities for gateway deployments.

mod bytecode;
mod env;

pub use bytecode::*;
pub use env::*;
