use token_gateway::{AbiValue, EncodingError, ParamType};

use super::Result;

/// Parses textual constructor arguments against `schema`, position by position.
pub fn parse_values(schema: &[ParamType], raw: &[String]) -> Result<Vec<AbiValue>> {
    if schema.len() != raw.len() {
        let err = EncodingError::ArityMismatch { expected: schema.len(), actual: raw.len() };
        return Err(err.into());
    }
    let values = schema.iter().zip(raw).map(|(ty, s)| ty.parse_value(s));
    Ok(values.collect::<std::result::Result<_, _>>()?)
}

/// Parses a comma-separated type list such as `string,string,uint8,address`.
pub fn parse_schema(types: &str) -> Result<Vec<ParamType>> {
    let types = types.trim().trim_start_matches('(').trim_end_matches(')');
    if types.is_empty() {
        return Ok(Vec::new());
    }
    Ok(types.split(',').map(str::parse::<ParamType>).collect::<std::result::Result<_, _>>()?)
}
