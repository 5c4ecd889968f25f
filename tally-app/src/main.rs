//! Tally web app entry point.

use std::sync::Arc;

use anyhow::Context;
use tally_app::{AppServer, AppState, init_tracing};
use tally_store::{Config, CounterStore, SqliteSessionFactory};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().await.context("failed to load config")?;
    init_tracing(config.general.log_level);

    info!("Tally starting...");

    let addr = config.server.socket_addr()?;
    let sessions = tokio::task::spawn_blocking({
        let storage = config.storage.clone();
        move || SqliteSessionFactory::from_config(&storage)
    })
    .await??;
    info!(path = %sessions.path().display(), "Using counter database");

    let state = AppState::new(Arc::new(CounterStore::new(sessions)));
    let server = AppServer::bind(addr, state).await?;
    info!("Counter page at http://{}", server.local_addr());

    server.run().await?;
    Ok(())
}
