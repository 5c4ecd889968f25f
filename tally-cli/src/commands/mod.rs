//! CLI command implementations.

pub mod config;
pub mod counter;
pub mod db;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tally_store::{Config, CounterStore, SqliteSessionFactory, default_config_path};

use crate::Cli;

/// Path of the config file in effect.
pub(crate) fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(default_config_path)
}

/// Loads the config, applying the `--database` override.
pub(crate) async fn load_config(cli: &Cli) -> Result<Config> {
    let path = config_path(cli);
    let mut config = Config::load_from(&path)
        .await
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    if let Some(database) = &cli.database {
        config.storage.database_path = Some(database.clone());
    }
    Ok(config)
}

/// Opens the counter store described by the effective config.
pub(crate) async fn open_store(cli: &Cli) -> Result<CounterStore> {
    let config = load_config(cli).await?;
    let sessions =
        tokio::task::spawn_blocking(move || SqliteSessionFactory::from_config(&config.storage))
            .await??;
    Ok(CounterStore::new(sessions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tally").chain(args.iter().copied())).unwrap()
    }

    #[tokio::test]
    async fn test_database_flag_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.json");
        let database = temp_dir.path().join("data").join("counter.db");

        let cli = cli(&[
            "--config",
            config_file.to_str().unwrap(),
            "--database",
            database.to_str().unwrap(),
        ]);

        let config = load_config(&cli).await.unwrap();
        assert_eq!(config.storage.database_path(), database);
        assert_eq!(config_path(&cli), config_file);
    }

    #[tokio::test]
    async fn test_open_store_uses_override() {
        let temp_dir = TempDir::new().unwrap();
        let database = temp_dir.path().join("counter.db");
        let cli = cli(&[
            "--config",
            temp_dir.path().join("missing.json").to_str().unwrap(),
            "--database",
            database.to_str().unwrap(),
        ]);

        let store = open_store(&cli).await.unwrap();
        assert_eq!(store.increment().unwrap(), 1);
        assert_eq!(store.sessions().path(), database.as_path());

        let reopened = open_store(&cli).await.unwrap();
        assert_eq!(reopened.get_current_value().unwrap(), 1);
    }
}
