//! Canonical ABI encoding of constructor parameters.
//!
//! Static values are laid out in-place in the head, strings go to the tail with a 32-byte length
//! prefix and are right-padded to a word boundary, and the head carries their offsets. The
//! heavy lifting is done by [`alloy_dyn_abi`], which is the same codec the EVM tooling decodes
//! with. This module only restricts the type set and checks integer widths before encoding:
//! values that do not fit are rejected, never truncated.

use core::{fmt, str::FromStr};

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::EncodingError;

/// A constructor parameter type supported by the token templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// `address`
    Address,
    /// `string`
    String,
    /// `uint8`
    Uint8,
    /// `uint16`
    Uint16,
    /// `uint256`
    Uint256,
    /// `bool`
    Bool,
}

impl ParamType {
    /// The Solidity name of the type.
    pub const fn sol_name(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::String => "string",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint256 => "uint256",
            Self::Bool => "bool",
        }
    }

    /// Parses a textual value as this type.
    ///
    /// Integers accept decimal or `0x`-prefixed hex. Width is not checked here; that happens at
    /// encoding time so that values built in code get the same treatment.
    pub fn parse_value(&self, s: &str) -> Result<AbiValue, EncodingError> {
        let invalid = || EncodingError::InvalidValue { ty: *self, value: s.to_string() };
        match self {
            Self::Address => {
                Address::from_str(s.trim()).map(AbiValue::Address).map_err(|_| invalid())
            }
            Self::String => Ok(AbiValue::String(s.to_string())),
            Self::Uint8 | Self::Uint16 | Self::Uint256 => {
                U256::from_str(s.trim()).map(AbiValue::Uint).map_err(|_| invalid())
            }
            Self::Bool => match s.trim() {
                "true" => Ok(AbiValue::Bool(true)),
                "false" => Ok(AbiValue::Bool(false)),
                _ => Err(invalid()),
            },
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sol_name())
    }
}

impl FromStr for ParamType {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "address" => Ok(Self::Address),
            "string" => Ok(Self::String),
            "uint8" => Ok(Self::Uint8),
            "uint16" => Ok(Self::Uint16),
            "uint256" | "uint" => Ok(Self::Uint256),
            "bool" => Ok(Self::Bool),
            other => Err(EncodingError::UnknownType(other.to_string())),
        }
    }
}

/// A constructor argument value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::From)]
pub enum AbiValue {
    /// An address.
    Address(Address),
    /// A UTF-8 string.
    String(String),
    /// An unsigned integer of any supported width.
    Uint(U256),
    /// A boolean.
    Bool(bool),
}

impl AbiValue {
    /// A short name for the kind of value, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Address(_) => "address",
            Self::String(_) => "string",
            Self::Uint(_) => "uint",
            Self::Bool(_) => "bool",
        }
    }
}

impl From<&str> for AbiValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<u8> for AbiValue {
    fn from(value: u8) -> Self {
        Self::Uint(U256::from(value))
    }
}

impl From<u16> for AbiValue {
    fn from(value: u16) -> Self {
        Self::Uint(U256::from(value))
    }
}

impl From<u64> for AbiValue {
    fn from(value: u64) -> Self {
        Self::Uint(U256::from(value))
    }
}

/// Encodes an ordered list of `(type, value)` pairs as ABI function parameters.
pub fn encode_params<'a, I>(params: I) -> Result<Bytes, EncodingError>
where
    I: IntoIterator<Item = (ParamType, &'a AbiValue)>,
{
    let tokens = params
        .into_iter()
        .enumerate()
        .map(|(index, (ty, value))| to_sol_value(index, ty, value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DynSolValue::Tuple(tokens).abi_encode_params().into())
}

/// Encodes `values` against a template's parameter `schema`.
///
/// The number of values must match the schema exactly; nothing is padded or dropped.
pub fn encode_constructor_args(
    schema: &[ParamType],
    values: &[AbiValue],
) -> Result<Bytes, EncodingError> {
    if schema.len() != values.len() {
        return Err(EncodingError::ArityMismatch { expected: schema.len(), actual: values.len() });
    }
    encode_params(schema.iter().copied().zip(values))
}

fn to_sol_value(
    index: usize,
    ty: ParamType,
    value: &AbiValue,
) -> Result<DynSolValue, EncodingError> {
    match (ty, value) {
        (ParamType::Address, AbiValue::Address(address)) => Ok(DynSolValue::Address(*address)),
        (ParamType::String, AbiValue::String(s)) => Ok(DynSolValue::String(s.clone())),
        (ParamType::Bool, AbiValue::Bool(b)) => Ok(DynSolValue::Bool(*b)),
        (ParamType::Uint8, AbiValue::Uint(v)) => checked_uint(index, ty, *v, 8),
        (ParamType::Uint16, AbiValue::Uint(v)) => checked_uint(index, ty, *v, 16),
        (ParamType::Uint256, AbiValue::Uint(v)) => Ok(DynSolValue::Uint(*v, 256)),
        (expected, found) => {
            Err(EncodingError::TypeMismatch { index, expected, found: found.kind() })
        }
    }
}

fn checked_uint(
    index: usize,
    ty: ParamType,
    value: U256,
    bits: usize,
) -> Result<DynSolValue, EncodingError> {
    if value.bit_len() > bits {
        return Err(EncodingError::ValueOutOfRange { index, ty, value });
    }
    Ok(DynSolValue::Uint(value, bits))
}
