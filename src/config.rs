//! Configuration management for the fieldcheck CLI.
//!
//! Handles:
//! - Command-line argument parsing
//! - Input and output selection for the driver binary

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the fieldcheck CLI
#[derive(Debug, Parser)]
#[command(name = "fieldcheck")]
#[command(about = "Validate a nested JSON document against per-field rules")]
#[command(version)]
pub struct Args {
    /// JSON document to validate; use "-" to read from stdin
    #[arg(help = "Path to the JSON document, or '-' for stdin")]
    pub document: PathBuf,

    /// Rules file describing the checks to run
    #[arg(long, help = "Rules file (TOML, or JSON with a .json extension)")]
    pub rules: PathBuf,

    /// Emit machine-readable output instead of the text report
    #[arg(long, help = "Emit results and summary as JSON")]
    pub json: bool,

    /// Log level for the CLI
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Document path ("-" means stdin)
    pub document: PathBuf,
    /// Rules file path
    pub rules: PathBuf,
    /// Whether to render JSON instead of text
    pub json_output: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            document: args.document,
            rules: args.rules,
            json_output: args.json,
            log_level: args.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_args() {
        let args = Args::parse_from([
            "fieldcheck",
            "response.json",
            "--rules",
            "rules.toml",
            "--json",
        ]);
        let config = Config::from_args(args).expect("valid config");

        assert_eq!(config.document, PathBuf::from("response.json"));
        assert_eq!(config.rules, PathBuf::from("rules.toml"));
        assert!(config.json_output);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_log_level_override() {
        let args = Args::parse_from([
            "fieldcheck",
            "-",
            "--rules",
            "rules.toml",
            "--log-level",
            "debug",
        ]);
        let config = Config::from_args(args).expect("valid config");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.document, PathBuf::from("-"));
    }
}
