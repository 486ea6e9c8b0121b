use clap::{Parser, Subcommand};

use crate::logging::LogArgs;

/// Offline tooling for token gateway deployments
#[derive(Parser, Debug)]
#[command(name = "gatewayctl", version, infer_subcommands = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub cmd: MainCmd,

    /// Logging configuration
    #[command(flatten)]
    pub log_args: LogArgs,
}

/// Main command enumeration for the gatewayctl CLI tool
#[derive(Subcommand, Debug)]
pub enum MainCmd {
    /// Predict the address of a factory deployment
    Predict(crate::predict::Cmd),
    /// ABI-encode constructor arguments
    Encode(crate::encode::Cmd),
    /// List the templates in a registry file
    Templates(crate::templates::Cmd),
    /// Build gateway calldata
    Calldata(crate::calldata::Cmd),
}

/// Error types for the main command system
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Command failure
    #[error("{0}")]
    Cli(#[from] crate::common::CliError),
}

impl Cli {
    /// Initialize logging and execute the selected command
    pub fn run(&self) -> Result<(), Error> {
        self.log_args.init()?;
        self.cmd.run()
    }
}

impl MainCmd {
    /// Execute the main command
    pub fn run(&self) -> Result<(), Error> {
        let output = match self {
            Self::Predict(cmd) => cmd.execute()?,
            Self::Encode(cmd) => cmd.execute()?,
            Self::Templates(cmd) => cmd.execute()?,
            Self::Calldata(cmd) => cmd.execute()?,
        };
        println!("{output}");
        Ok(())
    }
}
