//! hms-check - Hotel Management System API Conformance Test Runner
//!
//! A CLI tool that runs black-box conformance checks against a running
//! hotel management REST API (rooms, reservations, bookings).
//!
//! ## Features
//!
//! - 9 checks covering listings, resource creation, error handling, and
//!   cross-resource consistency
//! - Connectivity preflight that aborts the run when the server is down
//! - Multiple output formats (Table, JSON, CSV, Summary)
//! - Layered configuration: file, environment variables, CLI flags
//!
//! ## Usage
//!
//! ```bash
//! # Run all checks against the default local server
//! hms-check check
//!
//! # Run against another server, skipping the creation checks
//! hms-check check --base-url http://staging:3000 --skip 4,6
//!
//! # Run a single check
//! hms-check check --check 7
//!
//! # List available checks
//! hms-check list --detailed
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod config;
mod executor;
mod http;
mod models;
mod output;
mod suites;

use cli::Args;
use config::{AppConfig, ConfigFile, EnvConfig};
use executor::CheckRunner;
use models::Check;
use output::{write_summary_to_file, OutputFormat, ReportFormatter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .compact()
        .init();

    match args.command {
        cli::Command::Check(check_args) => {
            let code = run_checks(check_args).await?;
            std::process::exit(code);
        }
        cli::Command::List(list_args) => {
            list_checks(list_args);
        }
        cli::Command::Config(config_args) => {
            manage_config(config_args)?;
        }
    }

    Ok(())
}

/// Resolve the effective configuration: defaults, then file, then
/// environment, then CLI flags
fn resolve_config(args: &cli::CheckArgs) -> Result<AppConfig> {
    let env = EnvConfig::load();

    let file = match &env.config_file {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::load_default()?,
    };

    let mut config = file.app;
    env.apply(&mut config);

    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(format) = &args.format {
        config.format = format.clone();
    }
    if let Some(skip) = &args.skip {
        config.skip_checks = config::parse_skip_list(skip);
    }

    Ok(config)
}

async fn run_checks(args: cli::CheckArgs) -> Result<i32> {
    let config = resolve_config(&args)?;
    let format = OutputFormat::from_str(&config.format).unwrap_or(OutputFormat::Table);
    let formatter = ReportFormatter::new(format);

    info!("Checking hotel API at {}", config.base_url);

    let mut runner = CheckRunner::new(config)?;

    let preflight = runner.preflight().await;
    println!("{}", preflight.format_line());
    if !preflight.passed {
        return Ok(1);
    }

    if let Some(number) = args.check {
        let check = Check::from_number(number)
            .ok_or_else(|| anyhow::anyhow!("Invalid check number: {number}"))?;
        let result = runner.run_single(check).await;
        return Ok(if result.passed() { 0 } else { 1 });
    }

    let summary = runner.run_all().await;
    println!("{}", formatter.format_summary(&summary));

    if let Some(path) = &args.output {
        write_summary_to_file(path, &summary, format)?;
        println!("Results saved to: {path}");
    }

    Ok(if summary.all_passed() { 0 } else { 1 })
}

fn list_checks(args: cli::ListArgs) {
    println!("\nHotel API Conformance Checks (9 total)\n");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut current_suite = "";

    for check in Check::all() {
        let suite = check.suite();
        if suite != current_suite {
            println!("\n{suite}:");
            println!("──────────────────────────────────────────────────────────────────────");
            current_suite = suite;
        }

        if args.detailed {
            println!(
                "  {:2}. {:32} {}",
                check.number(),
                check.name(),
                check.description()
            );
        } else {
            println!("  {:2}. {}", check.number(), check.name());
        }
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}

fn manage_config(args: cli::ConfigArgs) -> Result<()> {
    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            ConfigFile::example().save(path)?;
            println!("✓ Configuration file created: {output}");
            println!("\nEdit the file to customize your settings.");
        }

        cli::ConfigAction::Show { format } => {
            let config = ConfigFile::load_default()?;
            let output = if format == "json" {
                serde_json::to_string_pretty(&config)?
            } else {
                serde_yaml::to_string(&config)?
            };
            println!("{output}");
        }

        cli::ConfigAction::Validate { file } => {
            let path = file.unwrap_or_else(|| {
                ConfigFile::find()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| "./hms-check.yaml".to_string())
            });

            match ConfigFile::load(&path) {
                Ok(_) => {
                    println!("✓ Configuration file is valid: {path}");
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {path}");
                    println!("  Error: {e}");
                    return Err(e);
                }
            }
        }

        cli::ConfigAction::Env => {
            config::print_env_help();
        }
    }

    Ok(())
}
