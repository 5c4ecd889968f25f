// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Tally CLI - the counter from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Show the current value
//! tally
//!
//! # Change it
//! tally increment
//! tally decrement
//! tally reset
//!
//! # JSON output
//! tally --format json --pretty show
//!
//! # Use a scratch database
//! tally --database /tmp/counter.db increment
//!
//! # Configuration
//! tally config path
//! tally config init
//! ```

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tally_core::CounterAction;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{config, counter, db};

// ============================================================================
// CLI Definition
// ============================================================================

/// Tally CLI - a single persistent counter.
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "A single persistent counter")]
#[command(long_about = r#"
Tally keeps one integer in a local SQLite database.

The counter is created on first use with value 0. There is no floor:
decrementing below zero gives negative values.

Examples:
  tally                       # Show the current value
  tally increment             # Add one
  tally decrement             # Subtract one
  tally reset                 # Back to zero
  tally --format json show    # JSON output
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'show' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file, overriding the configuration.
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the current value (default if no command specified).
    #[command(visible_alias = "s")]
    Show,

    /// Add one.
    #[command(visible_alias = "inc")]
    Increment,

    /// Subtract one.
    #[command(visible_alias = "dec")]
    Decrement,

    /// Set the counter back to zero.
    Reset,

    /// Manage configuration.
    Config(config::ConfigArgs),

    /// Manage the database.
    Db(db::DbArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("tally=debug,tally_store=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::Show) | None => counter::show(&cli).await,
        Some(Commands::Increment) => counter::apply(CounterAction::Increment, &cli).await,
        Some(Commands::Decrement) => counter::apply(CounterAction::Decrement, &cli).await,
        Some(Commands::Reset) => counter::apply(CounterAction::Reset, &cli).await,
        Some(Commands::Config(args)) => config::run(args, &cli).await,
        Some(Commands::Db(args)) => db::run(args, &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(ExitCode::Error as i32);
    }

    std::process::exit(ExitCode::Success as i32);
}
