//! ABI encoding of constructor arguments.

use clap::Parser;
use token_gateway::{encode_constructor_args, ParamType, TemplateKind};

use crate::common::{parse_schema, parse_values, CliError, Result};

/// ABI-encode constructor arguments
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Template kind whose constructor parameters to use
    #[arg(long = "kind", conflicts_with = "types")]
    pub kind: Option<TemplateKind>,

    /// Explicit comma-separated parameter types, e.g. `string,string,uint8,address`
    #[arg(long = "types")]
    pub types: Option<String>,

    /// Argument values, in parameter order
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cmd {
    fn schema(&self) -> Result<Vec<ParamType>> {
        match (self.kind, &self.types) {
            (Some(kind), _) => Ok(kind.constructor_params().to_vec()),
            (None, Some(types)) => parse_schema(types),
            (None, None) => {
                Err(CliError::InvalidInput("one of --kind or --types is required".into()))
            }
        }
    }

    /// Execute the encode command and render its output.
    pub fn execute(&self) -> Result<String> {
        let schema = self.schema()?;
        let values = parse_values(&schema, &self.args)?;
        Ok(encode_constructor_args(&schema, &values)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use rstest::rstest;
    use token_gateway::{BasicErc20Args, ConstructorArgs};

    #[rstest]
    #[case::by_kind(&["--kind", "BasicERC20"])]
    #[case::by_types(&["--types", "string,string,uint8,address"])]
    fn test_encode_erc20_args(#[case] schema: &[&str]) {
        let mut argv = vec!["encode"];
        argv.extend(schema);
        argv.extend(["Token", "TKN", "9", "0x00000000000000000000000000000000000000aa"]);
        let cmd = Cmd::try_parse_from(argv).unwrap();

        let expected = BasicErc20Args {
            name: "Token".into(),
            symbol: "TKN".into(),
            decimals: 9,
            gateway: address!("00000000000000000000000000000000000000aa"),
        }
        .encode()
        .unwrap();
        assert_eq!(cmd.execute().unwrap(), expected.to_string());
    }

    #[test]
    fn test_schema_required() {
        let cmd = Cmd::try_parse_from(["encode", "Token"]).unwrap();
        assert!(matches!(cmd.execute(), Err(CliError::InvalidInput(_))));
    }
}
