//! Counter commands - show, increment, decrement, reset.

use anyhow::Result;
use tally_core::{CounterAction, CounterRepository};
use tracing::debug;

use super::open_store;
use crate::output::{ActionOutput, CounterOutput, JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Prints the current record, creating it if needed.
pub async fn show(cli: &Cli) -> Result<()> {
    let store = open_store(cli).await?;
    let record = tokio::task::spawn_blocking(move || store.get_or_create()).await??;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_record(&record, cli.verbose));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&CounterOutput::from(&record))?);
        }
    }

    Ok(())
}

/// Applies `action` and prints the new value.
pub async fn apply(action: CounterAction, cli: &Cli) -> Result<()> {
    let store = open_store(cli).await?;
    let value = tokio::task::spawn_blocking(move || store.apply(action)).await??;
    debug!(action = %action, value, "Counter updated");

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_action(action, value));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&ActionOutput { action, value })?);
        }
    }

    Ok(())
}
