//! CREATE2 address derivation.
//!
//! The deployment address of a content-addressed creation is
//! `keccak256(0xff ++ deployer ++ salt ++ keccak256(init_code))[12:]`, where
//! `init_code = template_code ++ abi_encode(constructor_args)`.
//!
//! [`DeploymentPlan`] is the only place this pipeline is assembled. Address prediction returns
//! the plan's address and the factory deploys at the plan's address, so the two can not drift.

use core::str::FromStr;

use alloy_primitives::{keccak256, Address, Bytes, Keccak256, B256, U256};
use serde::{Deserialize, Serialize};

use crate::{constants::CREATE2_PREFIX, AbiValue, ConstructorArgs, EncodingError, Template};

/// A 32-byte CREATE2 salt.
///
/// Numeric salts are left-padded to 32 bytes, big endian.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::Deref,
)]
pub struct Salt(B256);

impl Salt {
    /// Creates a salt from raw bytes.
    pub const fn new(bytes: B256) -> Self {
        Self(bytes)
    }

    /// Returns the salt as a 32-byte word.
    pub const fn to_b256(self) -> B256 {
        self.0
    }
}

impl From<U256> for Salt {
    fn from(value: U256) -> Self {
        Self(B256::new(value.to_be_bytes::<32>()))
    }
}

impl From<u64> for Salt {
    fn from(value: u64) -> Self {
        U256::from(value).into()
    }
}

impl FromStr for Salt {
    type Err = <U256 as FromStr>::Err;

    /// Parses a decimal or `0x`-prefixed hex salt of at most 32 bytes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_str(s.trim()).map(Into::into)
    }
}

/// Hashes `template_code ++ encoded_args` without materializing the concatenation.
pub fn init_code_hash(template_code: &[u8], encoded_args: &[u8]) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(template_code);
    hasher.update(encoded_args);
    hasher.finalize()
}

/// Returns `template_code ++ encoded_args`.
pub fn init_code(template_code: &[u8], encoded_args: &[u8]) -> Bytes {
    let mut code = Vec::with_capacity(template_code.len() + encoded_args.len());
    code.extend_from_slice(template_code);
    code.extend_from_slice(encoded_args);
    code.into()
}

/// Computes the CREATE2 address for `deployer`, `salt` and an init code hash.
pub fn compute_address(deployer: Address, salt: Salt, init_code_hash: B256) -> Address {
    let mut preimage = [0u8; 85];
    preimage[0] = CREATE2_PREFIX;
    preimage[1..21].copy_from_slice(deployer.as_slice());
    preimage[21..53].copy_from_slice(salt.as_slice());
    preimage[53..85].copy_from_slice(init_code_hash.as_slice());
    Address::from_word(keccak256(preimage))
}

/// Predicts the address of deploying `template_code` with already-encoded constructor
/// arguments.
pub fn predict(
    deployer: Address,
    template_code: &[u8],
    encoded_args: &[u8],
    salt: Salt,
) -> Address {
    compute_address(deployer, salt, init_code_hash(template_code, encoded_args))
}

/// Predicts the address of deploying `template_code` with a typed argument set.
///
/// The argument type fixes the parameter order, so a caller can not swap two arguments of the
/// same type by accident.
pub fn predict_for<A: ConstructorArgs>(
    deployer: Address,
    template_code: &[u8],
    args: &A,
    salt: Salt,
) -> Result<Address, EncodingError> {
    Ok(predict(deployer, template_code, &args.encode()?, salt))
}

/// Everything a CREATE2 deployment of a template needs, computed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentPlan {
    /// The creating contract.
    pub deployer: Address,
    /// The caller-chosen salt.
    pub salt: Salt,
    /// ABI-encoded constructor arguments.
    pub encoded_args: Bytes,
    /// `keccak256(template_code ++ encoded_args)`.
    pub init_code_hash: B256,
    /// The address the deployment will occupy.
    pub address: Address,
}

impl DeploymentPlan {
    /// Encodes `values` against the template's schema and derives the deployment address.
    pub fn new(
        deployer: Address,
        template: &Template,
        values: &[AbiValue],
        salt: Salt,
    ) -> Result<Self, EncodingError> {
        let encoded_args = template.encode_args(values)?;
        let init_code_hash = init_code_hash(template.code(), &encoded_args);
        let address = compute_address(deployer, salt, init_code_hash);
        Ok(Self { deployer, salt, encoded_args, init_code_hash, address })
    }
}
