//! CLI argument parsing
//!
//! Defines command-line interface using clap. Flags that mirror config
//! file settings are optional so the file/env/flag precedence can be
//! resolved after parsing.

use clap::{Parser, Subcommand};

/// Hotel Management System API conformance test runner
#[derive(Parser, Debug)]
#[command(name = "hms-check")]
#[command(version)]
#[command(about = "Run conformance checks against a hotel management REST API")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run conformance checks
    Check(CheckArgs),

    /// List available checks
    List(ListArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Base URL of the hotel API server
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Specific check number to run (1-9)
    #[arg(short, long)]
    pub check: Option<u8>,

    /// Skip specific checks (comma-separated check numbers)
    #[arg(long)]
    pub skip: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format (table, json, json-pretty, csv, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Save results to file
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show detailed check information
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create a configuration file with defaults
    Init {
        /// Output path
        #[arg(short, long, default_value = "./hms-check.yaml")]
        output: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// Path to the file (defaults to the first standard location)
        file: Option<String>,
    },

    /// Show supported environment variables
    Env,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["hms-check", "list", "--detailed"]);
        match args.command {
            Command::List(list_args) => {
                assert!(list_args.detailed);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_check_args() {
        let args = Args::parse_from([
            "hms-check",
            "check",
            "--base-url",
            "http://10.0.0.1:3000",
            "--skip",
            "6,7",
            "--format",
            "json",
        ]);
        match args.command {
            Command::Check(check_args) => {
                assert_eq!(check_args.base_url.as_deref(), Some("http://10.0.0.1:3000"));
                assert_eq!(check_args.skip.as_deref(), Some("6,7"));
                assert_eq!(check_args.format.as_deref(), Some("json"));
                assert!(check_args.check.is_none());
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_check_args_defaults_unset() {
        let args = Args::parse_from(["hms-check", "check"]);
        match args.command {
            Command::Check(check_args) => {
                assert!(check_args.base_url.is_none());
                assert!(check_args.timeout.is_none());
                assert!(check_args.output.is_none());
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_config_init_args() {
        let args = Args::parse_from(["hms-check", "config", "init", "--force"]);
        match args.command {
            Command::Config(config_args) => match config_args.action {
                ConfigAction::Init { output, force } => {
                    assert_eq!(output, "./hms-check.yaml");
                    assert!(force);
                }
                _ => panic!("Expected Init action"),
            },
            _ => panic!("Expected Config command"),
        }
    }
}
