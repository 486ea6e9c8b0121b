//! Template registry inspection.

use std::path::PathBuf;

use alloy_primitives::B256;
use clap::Parser;
use serde::Serialize;
use token_gateway::{TemplateKind, TemplateRegistry};

use crate::common::Result;

/// List the templates in a registry file
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Template registry file (JSON mapping name to `{kind, bytecode}`)
    #[arg(long = "templates", env = "TEMPLATES_FILE")]
    pub templates: PathBuf,

    /// Print the listing as JSON
    #[arg(long = "json")]
    pub json: bool,
}

/// One registry entry as printed by `templates`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    /// Registered name
    pub name: String,
    /// Template kind
    pub kind: TemplateKind,
    /// Constructor signature
    pub signature: String,
    /// Hash of the creation code without arguments
    pub code_hash: B256,
    /// Creation code length in bytes
    pub code_len: usize,
}

/// Summarizes every template in `registry`, in name order.
pub fn summarize(registry: &TemplateRegistry) -> Vec<TemplateSummary> {
    registry
        .iter()
        .map(|template| TemplateSummary {
            name: template.name().to_string(),
            kind: template.kind(),
            signature: template.kind().signature(),
            code_hash: template.code_hash(),
            code_len: template.code().len(),
        })
        .collect()
}

impl Cmd {
    /// Execute the templates command and render its output.
    pub fn execute(&self) -> Result<String> {
        let summaries = summarize(&TemplateRegistry::from_file(&self.templates)?);
        if self.json {
            return Ok(serde_json::to_string_pretty(&summaries)?);
        }
        let lines: Vec<_> = summaries
            .iter()
            .map(|t| {
                let TemplateSummary { name, kind, signature, code_hash, code_len } = t;
                format!("{name}\t{kind}{signature}\t{code_hash}\t{code_len} bytes")
            })
            .collect();
        Ok(lines.join("\n"))
    }
}
