//! HTTP server lifecycle.

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::error::AppError;
use crate::routes::{AppState, build_router};
use crate::shutdown::{ShutdownHandle, ShutdownManager};

/// The bound HTTP server.
pub struct AppServer {
    addr: SocketAddr,
    /// Bound at construction so the port is held until `run()`.
    listener: TcpListener,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl AppServer {
    /// Binds to `addr`. Port 0 picks a free port.
    ///
    /// # Errors
    ///
    /// Returns error if the address cannot be bound.
    pub async fn bind(addr: SocketAddr, state: AppState) -> Result<Self, AppError> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        tracing::info!(addr = %addr, "Server bound");
        Ok(Self {
            addr,
            listener,
            state,
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    /// The address actually bound.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns a handle that stops the server.
    pub fn handle(&self) -> ShutdownHandle {
        self.shutdown.handle()
    }

    /// Serves requests until Ctrl-C, SIGTERM, or a handle requests shutdown.
    ///
    /// # Errors
    ///
    /// Returns error if the accept loop fails.
    pub async fn run(self) -> Result<(), AppError> {
        tracing::info!(addr = %self.addr, "Starting server");

        let app = build_router(self.state);
        let shutdown = self.shutdown.clone();
        axum::serve(self.listener, app)
            .with_graceful_shutdown(async move {
                shutdown.wait_for_shutdown().await;
            })
            .into_future()
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}
