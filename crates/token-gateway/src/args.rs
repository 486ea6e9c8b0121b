//! Typed constructor arguments, one struct per template kind.

use alloy_primitives::{Address, Bytes, U256};

use crate::{encode_constructor_args, AbiValue, EncodingError, ParamType, TemplateKind};

/// A constructor argument set with a fixed parameter order.
pub trait ConstructorArgs: Sized {
    /// The template kind these arguments construct.
    const KIND: TemplateKind;

    /// The arguments in constructor order.
    fn to_values(&self) -> Vec<AbiValue>;

    /// Reads arguments back from constructor-ordered values.
    fn from_values(values: &[AbiValue]) -> Result<Self, EncodingError>;

    /// ABI-encodes the arguments.
    fn encode(&self) -> Result<Bytes, EncodingError> {
        encode_constructor_args(Self::KIND.constructor_params(), &self.to_values())
    }
}

/// Constructor arguments of `BasicERC721`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicErc721Args {
    /// Initial collection owner.
    pub owner: Address,
    /// Collection name.
    pub name: String,
    /// Collection symbol.
    pub symbol: String,
    /// Prefix of every token URI.
    pub base_uri: String,
    /// Operator-filter registrant to subscribe to or copy from; zero for none.
    pub operator_filter_registrant: Address,
    /// Whether to subscribe to the registrant rather than copy it.
    pub subscribe: bool,
    /// The gateway privileged calls are deferred to.
    pub gateway: Address,
}

impl ConstructorArgs for BasicErc721Args {
    const KIND: TemplateKind = TemplateKind::BasicErc721;

    fn to_values(&self) -> Vec<AbiValue> {
        vec![
            self.owner.into(),
            self.name.clone().into(),
            self.symbol.clone().into(),
            self.base_uri.clone().into(),
            self.operator_filter_registrant.into(),
            self.subscribe.into(),
            self.gateway.into(),
        ]
    }

    fn from_values(values: &[AbiValue]) -> Result<Self, EncodingError> {
        let mut r = ArgReader::new(Self::KIND, values)?;
        Ok(Self {
            owner: r.address()?,
            name: r.string()?,
            symbol: r.string()?,
            base_uri: r.string()?,
            operator_filter_registrant: r.address()?,
            subscribe: r.bool()?,
            gateway: r.address()?,
        })
    }
}

/// Constructor arguments of `BasicERC1155`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicErc1155Args {
    /// Initial collection owner.
    pub owner: Address,
    /// Metadata URI template.
    pub uri: String,
    /// Operator-filter registrant to subscribe to or copy from; zero for none.
    pub operator_filter_registrant: Address,
    /// Whether to subscribe to the registrant rather than copy it.
    pub subscribe: bool,
    /// The gateway privileged calls are deferred to.
    pub gateway: Address,
}

impl ConstructorArgs for BasicErc1155Args {
    const KIND: TemplateKind = TemplateKind::BasicErc1155;

    fn to_values(&self) -> Vec<AbiValue> {
        vec![
            self.owner.into(),
            self.uri.clone().into(),
            self.operator_filter_registrant.into(),
            self.subscribe.into(),
            self.gateway.into(),
        ]
    }

    fn from_values(values: &[AbiValue]) -> Result<Self, EncodingError> {
        let mut r = ArgReader::new(Self::KIND, values)?;
        Ok(Self {
            owner: r.address()?,
            uri: r.string()?,
            operator_filter_registrant: r.address()?,
            subscribe: r.bool()?,
            gateway: r.address()?,
        })
    }
}

/// Constructor arguments of `BasicERC20`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicErc20Args {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Display decimals.
    pub decimals: u8,
    /// The gateway privileged calls are deferred to.
    pub gateway: Address,
}

impl ConstructorArgs for BasicErc20Args {
    const KIND: TemplateKind = TemplateKind::BasicErc20;

    fn to_values(&self) -> Vec<AbiValue> {
        vec![
            self.name.clone().into(),
            self.symbol.clone().into(),
            self.decimals.into(),
            self.gateway.into(),
        ]
    }

    fn from_values(values: &[AbiValue]) -> Result<Self, EncodingError> {
        let mut r = ArgReader::new(Self::KIND, values)?;
        Ok(Self {
            name: r.string()?,
            symbol: r.string()?,
            decimals: r.u8()?,
            gateway: r.address()?,
        })
    }
}

/// Constructor arguments of `BasicERC20Capped`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicErc20CappedArgs {
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Display decimals.
    pub decimals: u8,
    /// Maximum total supply.
    pub cap: U256,
    /// The gateway privileged calls are deferred to.
    pub gateway: Address,
}

impl ConstructorArgs for BasicErc20CappedArgs {
    const KIND: TemplateKind = TemplateKind::BasicErc20Capped;

    fn to_values(&self) -> Vec<AbiValue> {
        vec![
            self.name.clone().into(),
            self.symbol.clone().into(),
            self.decimals.into(),
            self.cap.into(),
            self.gateway.into(),
        ]
    }

    fn from_values(values: &[AbiValue]) -> Result<Self, EncodingError> {
        let mut r = ArgReader::new(Self::KIND, values)?;
        Ok(Self {
            name: r.string()?,
            symbol: r.string()?,
            decimals: r.u8()?,
            cap: r.uint()?,
            gateway: r.address()?,
        })
    }
}

/// Constructor arguments of any template kind.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum TemplateArgs {
    /// `BasicERC721` arguments.
    BasicErc721(BasicErc721Args),
    /// `BasicERC1155` arguments.
    BasicErc1155(BasicErc1155Args),
    /// `BasicERC20` arguments.
    BasicErc20(BasicErc20Args),
    /// `BasicERC20Capped` arguments.
    BasicErc20Capped(BasicErc20CappedArgs),
}

impl TemplateArgs {
    /// Reads the argument set of `kind` from constructor-ordered values.
    pub fn from_values(kind: TemplateKind, values: &[AbiValue]) -> Result<Self, EncodingError> {
        Ok(match kind {
            TemplateKind::BasicErc721 => BasicErc721Args::from_values(values)?.into(),
            TemplateKind::BasicErc1155 => BasicErc1155Args::from_values(values)?.into(),
            TemplateKind::BasicErc20 => BasicErc20Args::from_values(values)?.into(),
            TemplateKind::BasicErc20Capped => BasicErc20CappedArgs::from_values(values)?.into(),
        })
    }

    /// The gateway identity carried by the arguments.
    pub const fn gateway(&self) -> Address {
        match self {
            Self::BasicErc721(args) => args.gateway,
            Self::BasicErc1155(args) => args.gateway,
            Self::BasicErc20(args) => args.gateway,
            Self::BasicErc20Capped(args) => args.gateway,
        }
    }
}

/// Positional reader over constructor-ordered values.
struct ArgReader<'a> {
    params: &'static [ParamType],
    values: &'a [AbiValue],
    index: usize,
}

impl<'a> ArgReader<'a> {
    fn new(kind: TemplateKind, values: &'a [AbiValue]) -> Result<Self, EncodingError> {
        let params = kind.constructor_params();
        if params.len() != values.len() {
            return Err(EncodingError::ArityMismatch {
                expected: params.len(),
                actual: values.len(),
            });
        }
        Ok(Self { params, values, index: 0 })
    }

    fn next(&mut self) -> (usize, ParamType, &'a AbiValue) {
        let index = self.index;
        self.index += 1;
        (index, self.params[index], &self.values[index])
    }

    fn address(&mut self) -> Result<Address, EncodingError> {
        match self.next() {
            (_, _, AbiValue::Address(address)) => Ok(*address),
            (index, expected, found) => Err(mismatch(index, expected, found)),
        }
    }

    fn string(&mut self) -> Result<String, EncodingError> {
        match self.next() {
            (_, _, AbiValue::String(s)) => Ok(s.clone()),
            (index, expected, found) => Err(mismatch(index, expected, found)),
        }
    }

    fn bool(&mut self) -> Result<bool, EncodingError> {
        match self.next() {
            (_, _, AbiValue::Bool(b)) => Ok(*b),
            (index, expected, found) => Err(mismatch(index, expected, found)),
        }
    }

    fn uint(&mut self) -> Result<U256, EncodingError> {
        match self.next() {
            (_, _, AbiValue::Uint(v)) => Ok(*v),
            (index, expected, found) => Err(mismatch(index, expected, found)),
        }
    }

    fn u8(&mut self) -> Result<u8, EncodingError> {
        let (index, ty) = (self.index, self.params[self.index]);
        let value = self.uint()?;
        u8::try_from(value).map_err(|_| EncodingError::ValueOutOfRange { index, ty, value })
    }
}

const fn mismatch(index: usize, expected: ParamType, found: &AbiValue) -> EncodingError {
    EncodingError::TypeMismatch { index, expected, found: found.kind() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const GATEWAY: Address = address!("00000000000000000000000000000000000000aa");

    #[test]
    fn test_values_follow_constructor_order() {
        let args = BasicErc20CappedArgs {
            name: "Token".into(),
            symbol: "TKN".into(),
            decimals: 18,
            cap: U256::from(1_000_000),
            gateway: GATEWAY,
        };
        let values = args.to_values();
        assert_eq!(values[3], AbiValue::Uint(U256::from(1_000_000)));
        assert_eq!(BasicErc20CappedArgs::from_values(&values).unwrap(), args);
    }

    #[test]
    fn test_from_values_rejects_wrong_shape() {
        let values: Vec<AbiValue> = vec!["Token".into(), "TKN".into(), 9u8.into()];
        assert_eq!(
            BasicErc20Args::from_values(&values),
            Err(EncodingError::ArityMismatch { expected: 4, actual: 3 })
        );

        let values: Vec<AbiValue> = vec!["Token".into(), "TKN".into(), GATEWAY.into(), 9u8.into()];
        assert_eq!(
            BasicErc20Args::from_values(&values),
            Err(EncodingError::TypeMismatch {
                index: 2,
                expected: ParamType::Uint8,
                found: "address"
            })
        );

        let values: Vec<AbiValue> =
            vec!["Token".into(), "TKN".into(), 300u64.into(), GATEWAY.into()];
        assert!(matches!(
            BasicErc20Args::from_values(&values),
            Err(EncodingError::ValueOutOfRange { index: 2, .. })
        ));
    }

    #[test]
    fn test_template_args_gateway() {
        let args = BasicErc1155Args {
            owner: address!("1000000000000000000000000000000000000001"),
            uri: "some uri/".into(),
            operator_filter_registrant: Address::ZERO,
            subscribe: false,
            gateway: GATEWAY,
        };
        let parsed =
            TemplateArgs::from_values(TemplateKind::BasicErc1155, &args.to_values()).unwrap();
        assert_eq!(parsed.gateway(), GATEWAY);
        assert_eq!(parsed, TemplateArgs::BasicErc1155(args));
    }
}
