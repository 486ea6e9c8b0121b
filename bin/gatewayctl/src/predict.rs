//! Offline CREATE2 address prediction.

use alloy_primitives::{Address, Bytes, B256};
use clap::Parser;
use serde::Serialize;
use token_gateway::{DeploymentPlan, Salt};
use tracing::info;

use crate::common::{parse_values, Result, TemplateSourceArgs};

/// Predict the address a factory deploys a template to
#[derive(Parser, Debug)]
pub struct Cmd {
    /// The factory contract performing the deployment
    #[arg(long = "factory")]
    pub factory: Address,

    /// Deployment salt, decimal or 0x-prefixed hex
    #[arg(long = "salt", default_value = "0")]
    pub salt: Salt,

    /// Template selection
    #[command(flatten)]
    pub template_args: TemplateSourceArgs,

    /// Print the full deployment plan as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Constructor arguments, in the template's parameter order
    #[arg(value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// A deployment plan as printed by `predict --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Predicted asset address
    pub address: Address,
    /// Deploying factory
    pub factory: Address,
    /// Template name
    pub template: String,
    /// Salt as a 32-byte word
    pub salt: B256,
    /// Hash of the creation code with arguments appended
    pub init_code_hash: B256,
    /// ABI-encoded constructor arguments
    pub encoded_args: Bytes,
}

impl Cmd {
    /// Compute the deployment plan.
    pub fn prediction(&self) -> Result<Prediction> {
        let template = self.template_args.resolve()?;
        let values = parse_values(template.params(), &self.args)?;
        let plan = DeploymentPlan::new(self.factory, &template, &values, self.salt)?;
        info!(target: "gatewayctl::predict", template = template.name(), address = %plan.address, "Predicted deployment");
        Ok(Prediction {
            address: plan.address,
            factory: plan.deployer,
            template: template.name().to_string(),
            salt: plan.salt.to_b256(),
            init_code_hash: plan.init_code_hash,
            encoded_args: plan.encoded_args,
        })
    }

    /// Execute the predict command and render its output.
    pub fn execute(&self) -> Result<String> {
        let prediction = self.prediction()?;
        if self.json {
            return Ok(serde_json::to_string_pretty(&prediction)?);
        }
        Ok(prediction.address.to_string())
    }
}
