//! Session factory.
//!
//! Every store operation opens its own connection through a
//! [`SessionFactory`], runs one transaction on it, and drops it.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::StorageConfig;
use crate::error::StoreError;
use crate::schema;

/// Default time a connection waits for a locked database.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens connections to the counter database.
pub trait SessionFactory: Send + Sync {
    /// Opens a new connection with the schema in place.
    ///
    /// # Errors
    ///
    /// Returns error if the database cannot be opened.
    fn open(&self) -> Result<Connection, StoreError>;
}

/// File-backed SQLite session factory.
#[derive(Debug, Clone)]
pub struct SqliteSessionFactory {
    path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteSessionFactory {
    /// Creates a factory for the database at `path`.
    ///
    /// Creates the parent directory and the schema if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory or database cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::with_busy_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Creates a factory with an explicit busy timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the directory or database cannot be created.
    pub fn with_busy_timeout(
        path: impl Into<PathBuf>,
        busy_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let factory = Self {
            path: path.into(),
            busy_timeout,
        };

        if let Some(parent) = factory.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = factory.open()?;
        schema::ensure_schema(&conn)?;

        info!(path = %factory.path.display(), "Counter database ready");
        Ok(factory)
    }

    /// Creates a factory from the storage section of the config.
    ///
    /// # Errors
    ///
    /// Returns error if the database cannot be created.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StoreError> {
        Self::with_busy_timeout(config.database_path(), config.busy_timeout())
    }

    /// Returns the database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drops and recreates the schema. Deletes the counter.
    ///
    /// # Errors
    ///
    /// Returns error if the database cannot be opened or reset.
    pub fn reset_db(&self) -> Result<(), StoreError> {
        let conn = self.open()?;
        schema::reset_db(&conn)
    }
}

impl SessionFactory for SqliteSessionFactory {
    fn open(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(self.busy_timeout)?;
        debug!(path = %self.path.display(), "Opened session");
        Ok(conn)
    }
}
