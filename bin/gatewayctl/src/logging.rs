//! Logging configuration for the gatewayctl CLI tool.
//!
//! Verbosity comes from `-v` flags unless `RUST_LOG` is set. Logs go to stderr, or to the file
//! given with `--log.file`, so command output on stdout stays machine-readable.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::common::Result;

/// Logging configuration arguments.
#[derive(Debug, Clone, Default, Parser)]
pub struct LogArgs {
    /// Increase logging verbosity (-v = error, -vv = warn, -vvv = info, -vvvv = debug, -vvvvv =
    /// trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log file path. If specified, logs are written to this file instead of stderr.
    #[arg(long = "log.file", visible_aliases = ["log-file"], global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colorful console logging. Only applies when logging to stderr (no --log.file).
    #[arg(long = "log.no-color", visible_aliases = ["log-no-color"], global = true)]
    pub log_no_color: bool,
}

impl LogArgs {
    /// The filter directives implied by the `-v` count, if any.
    ///
    /// `RUST_LOG` takes precedence over this when set.
    pub fn directives(&self) -> Option<String> {
        let level = match self.verbose {
            0 => return None,
            1 => Level::ERROR,
            2 => Level::WARN,
            3 => Level::INFO,
            4 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Some(format!("gatewayctl={level},token_gateway={level}"))
    }

    /// Initialize the tracing subscriber based on the logging configuration.
    ///
    /// Log target is only shown for DEBUG level and above.
    pub fn init(&self) -> Result<()> {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            self.directives().map_or_else(|| EnvFilter::new("off"), EnvFilter::new)
        };
        let show_target = self.verbose >= 4;

        if let Some(ref log_file) = self.log_file {
            let file = std::fs::File::create(log_file)?;
            fmt()
                .with_env_filter(filter)
                .with_target(show_target)
                .with_writer(file)
                .with_ansi(false)
                .init();
        } else {
            fmt()
                .with_env_filter(filter)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .with_ansi(!self.log_no_color)
                .init();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, None)]
    #[case(1, Some("gatewayctl=ERROR,token_gateway=ERROR"))]
    #[case(4, Some("gatewayctl=DEBUG,token_gateway=DEBUG"))]
    #[case(9, Some("gatewayctl=TRACE,token_gateway=TRACE"))]
    fn test_verbosity_directives(#[case] verbose: u8, #[case] expected: Option<&str>) {
        let args = LogArgs { verbose, ..Default::default() };
        assert_eq!(args.directives().as_deref(), expected);
    }
}
