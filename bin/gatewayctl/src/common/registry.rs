use std::path::PathBuf;

use clap::Parser;
use token_gateway::{Template, TemplateKind, TemplateRegistry};
use tracing::debug;

use super::{load_hex, CliError, Result};

/// Where template code comes from: a registry file, or inline code plus a kind.
#[derive(Debug, Clone, Default, Parser)]
pub struct TemplateSourceArgs {
    /// Template registry file (JSON mapping name to `{kind, bytecode}`)
    #[arg(long = "templates", env = "TEMPLATES_FILE")]
    pub templates: Option<PathBuf>,

    /// Template name to look up in the registry
    #[arg(long = "template", requires = "templates")]
    pub template: Option<String>,

    /// Template creation code as hex string
    #[arg(long = "code", conflicts_with = "template")]
    pub code: Option<String>,

    /// File containing template creation code. If '-' is specified, code is read from stdin
    #[arg(long = "codefile", conflicts_with = "template")]
    pub codefile: Option<String>,

    /// Template kind of inline code, which fixes the constructor parameters
    #[arg(long = "kind")]
    pub kind: Option<TemplateKind>,
}

impl TemplateSourceArgs {
    /// Loads the registry file, if one was given.
    pub fn registry(&self) -> Result<Option<TemplateRegistry>> {
        let Some(path) = &self.templates else { return Ok(None) };
        let registry = TemplateRegistry::from_file(path)?;
        debug!(target: "gatewayctl::registry", path = %path.display(), templates = registry.len(), "Loaded template registry");
        Ok(Some(registry))
    }

    /// Resolves the selected template.
    pub fn resolve(&self) -> Result<Template> {
        if let Some(name) = &self.template {
            let registry = self.registry()?.unwrap_or_default();
            return registry
                .get(name)
                .cloned()
                .ok_or_else(|| CliError::InvalidInput(format!("unknown template `{name}`")));
        }

        let code = load_hex(self.code.as_deref(), self.codefile.as_deref())?.ok_or_else(|| {
            CliError::InvalidInput("one of --template, --code or --codefile is required".into())
        })?;
        let kind = self
            .kind
            .ok_or_else(|| CliError::InvalidInput("--kind is required with inline code".into()))?;
        let registry = TemplateRegistry::new().with_template(kind.name(), kind, code)?;
        registry
            .get(kind.name())
            .cloned()
            .ok_or_else(|| CliError::InvalidInput(format!("unknown template `{kind}`")))
    }
}
