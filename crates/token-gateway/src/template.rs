//! Token templates and the registry factories resolve them from.

use std::{collections::BTreeMap, fmt, path::Path, str::FromStr};

use alloy_primitives::{keccak256, Bytes, B256};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::templates, encode_constructor_args, AbiValue, EncodingError, ParamType,
    TemplateError,
};

/// The asset a template creates. Each kind has a fixed constructor parameter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateKind {
    /// Basic non-fungible collection.
    #[serde(rename = "BasicERC721")]
    BasicErc721,
    /// Basic multi-token collection.
    #[serde(rename = "BasicERC1155")]
    BasicErc1155,
    /// Basic fungible token.
    #[serde(rename = "BasicERC20")]
    BasicErc20,
    /// Fungible token with a supply cap.
    #[serde(rename = "BasicERC20Capped")]
    BasicErc20Capped,
}

impl TemplateKind {
    /// All template kinds.
    pub const ALL: [Self; 4] =
        [Self::BasicErc721, Self::BasicErc1155, Self::BasicErc20, Self::BasicErc20Capped];

    /// The canonical template name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BasicErc721 => templates::BASIC_ERC721,
            Self::BasicErc1155 => templates::BASIC_ERC1155,
            Self::BasicErc20 => templates::BASIC_ERC20,
            Self::BasicErc20Capped => templates::BASIC_ERC20_CAPPED,
        }
    }

    /// The ordered constructor parameter types.
    pub const fn constructor_params(&self) -> &'static [ParamType] {
        use ParamType::{Address, Bool, String, Uint256, Uint8};
        match self {
            // owner, name, symbol, baseURI, subscriptionOrRegistrantToCopy, subscribe, gateway
            Self::BasicErc721 => &[Address, String, String, String, Address, Bool, Address],
            // owner, uri, subscriptionOrRegistrantToCopy, subscribe, gateway
            Self::BasicErc1155 => &[Address, String, Address, Bool, Address],
            // name, symbol, decimals, gateway
            Self::BasicErc20 => &[String, String, Uint8, Address],
            // name, symbol, decimals, cap, gateway
            Self::BasicErc20Capped => &[String, String, Uint8, Uint256, Address],
        }
    }

    /// The Solidity-style constructor signature, e.g. `(string,string,uint8,address)`.
    pub fn signature(&self) -> String {
        let params: Vec<_> = self.constructor_params().iter().map(ParamType::sol_name).collect();
        format!("({})", params.join(","))
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateKind {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| TemplateError::UnknownKind(s.to_string()))
    }
}

/// A named, immutable code blob and the constructor schema of its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    kind: TemplateKind,
    code: Bytes,
}

impl Template {
    /// The template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The template kind.
    pub const fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// The creation bytecode, without constructor arguments.
    pub const fn code(&self) -> &Bytes {
        &self.code
    }

    /// `keccak256` of the creation bytecode.
    pub fn code_hash(&self) -> B256 {
        keccak256(&self.code)
    }

    /// The ordered constructor parameter types.
    pub const fn params(&self) -> &'static [ParamType] {
        self.kind.constructor_params()
    }

    /// Encodes constructor arguments against this template's schema.
    pub fn encode_args(&self, values: &[AbiValue]) -> Result<Bytes, EncodingError> {
        encode_constructor_args(self.params(), values)
    }
}

/// One registry entry as it appears in a registry file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// The template kind.
    pub kind: TemplateKind,
    /// Hex-encoded creation bytecode.
    pub bytecode: Bytes,
}

/// Templates available to a factory, keyed by name.
///
/// A registry file is a JSON object mapping template names to [`TemplateConfig`]s:
///
/// ```json
/// {
///   "BasicERC20": { "kind": "BasicERC20", "bytecode": "0x6080..." }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template. A name can only be registered once.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        kind: TemplateKind,
        code: Bytes,
    ) -> Result<&Template, TemplateError> {
        let name = name.into();
        if code.is_empty() {
            return Err(TemplateError::EmptyCode(name));
        }
        if self.templates.contains_key(&name) {
            return Err(TemplateError::AlreadyRegistered(name));
        }
        debug!(target: "token_gateway::template", %name, %kind, code_len = code.len(), "Registered template");
        let template = Template { name: name.clone(), kind, code };
        Ok(self.templates.entry(name).or_insert(template))
    }

    /// Builder-style [`Self::register`].
    pub fn with_template(
        mut self,
        name: impl Into<String>,
        kind: TemplateKind,
        code: Bytes,
    ) -> Result<Self, TemplateError> {
        self.register(name, kind, code)?;
        Ok(self)
    }

    /// A copy of the registry holding only templates of the given kinds.
    pub fn restricted_to(&self, kinds: &[TemplateKind]) -> Self {
        let templates = self
            .templates
            .iter()
            .filter(|(_, template)| kinds.contains(&template.kind))
            .map(|(name, template)| (name.clone(), template.clone()))
            .collect();
        Self { templates }
    }

    /// Looks up a template by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Iterates over templates in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.values()
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Parses a registry from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let entries: BTreeMap<String, TemplateConfig> = serde_json::from_str(json)?;
        entries.into_iter().try_fold(Self::new(), |registry, (name, entry)| {
            registry.with_template(name, entry.kind, entry.bytecode)
        })
    }

    /// Reads a registry file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}
