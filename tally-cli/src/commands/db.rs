//! Database command - maintenance of the counter database.

use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::info;

use super::open_store;
use crate::Cli;

/// Arguments for the db command.
#[derive(Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub action: DbAction,
}

/// Db subcommands.
#[derive(Subcommand)]
pub enum DbAction {
    /// Drop and recreate the counter table. The next access starts at 0.
    Reset {
        /// Confirm the reset.
        #[arg(long)]
        yes: bool,
    },
}

/// Runs the db command.
pub async fn run(args: &DbArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        DbAction::Reset { yes } => reset_db(*yes, cli).await,
    }
}

async fn reset_db(yes: bool, cli: &Cli) -> Result<()> {
    if !yes {
        anyhow::bail!("Refusing to reset the database without --yes");
    }

    let store = open_store(cli).await?;
    let path = store.sessions().path().to_path_buf();
    tokio::task::spawn_blocking(move || store.sessions().reset_db()).await??;

    info!(path = %path.display(), "Database reset");
    if !cli.quiet {
        println!("Database reset: {}", path.display());
    }

    Ok(())
}
