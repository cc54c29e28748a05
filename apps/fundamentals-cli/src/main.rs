//! `fundamentals` command-line front end
//!
//! Runs a single calculator or string operation and prints its result.
//!
//! # Usage
//!
//! ```bash
//! fundamentals add -10 5
//! fundamentals --json reverse hi
//! fundamentals is-palindrome lol
//! fundamentals --config config/example.yaml --print-config
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fundamentals::{CalculatorService, StringService};

use crate::commands::{Command, execute};
use crate::config::AppConfig;

/// Integer and text utilities
#[derive(Parser, Debug)]
#[command(name = "fundamentals")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit results as JSON (overrides output.format)
    #[arg(long, global = true)]
    json: bool,

    /// Print effective configuration (JSON) and exit
    #[arg(long, global = true)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (FUNDAMENTALS__*) -> 4) CLI overrides
    let mut config =
        AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    config.apply_cli_overrides(cli.json);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init_logging(&config.logging, cli.verbose)?;
    tracing::debug!(path = ?cli.config, "configuration loaded");

    let Some(command) = cli.command else {
        anyhow::bail!("no command given, see --help");
    };

    let outcome = execute(&command, &CalculatorService::new(), &StringService::new())?;
    println!("{}", outcome.render(&config.output)?);
    Ok(())
}
