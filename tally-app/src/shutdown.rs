//! Graceful shutdown signalling.

use tokio::signal;
use tokio::sync::watch;

/// Resolves when the process receives Ctrl-C or SIGTERM, or when a
/// [`ShutdownHandle`] asks for it.
#[derive(Debug)]
pub struct ShutdownManager {
    tx: watch::Sender<bool>,
}

impl ShutdownManager {
    /// Creates a manager that has not been triggered.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Returns a handle that can trigger shutdown from elsewhere.
    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            tx: self.tx.clone(),
        }
    }

    /// Returns true once shutdown was requested.
    pub fn is_shutting_down(&self) -> bool {
        *self.tx.borrow()
    }

    /// Waits for a signal or an explicit request.
    pub async fn wait_for_shutdown(&self) {
        let mut rx = self.tx.subscribe();
        let requested = async move {
            // An error means every handle is gone; only signals remain.
            if rx.wait_for(|stop| *stop).await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    tokio::select! {
                        _ = signal::ctrl_c() => {},
                        _ = sigterm.recv() => {},
                        () = requested => {},
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Could not install SIGTERM handler");
                    tokio::select! {
                        _ = signal::ctrl_c() => {},
                        () = requested => {},
                    }
                }
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = signal::ctrl_c() => {},
                () = requested => {},
            }
        }

        self.tx.send_replace(true);
        tracing::info!("Shutting down gracefully...");
    }
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable trigger for a running server.
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    tx: watch::Sender<bool>,
}

impl ShutdownHandle {
    /// Asks the server to stop accepting connections and drain.
    pub fn shutdown(&self) {
        self.tx.send_replace(true);
    }
}
