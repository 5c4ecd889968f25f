// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Tally Store
//!
//! Persistence for the Tally counter.
//!
//! This crate provides:
//!
//! - **CounterStore**: transactional read-modify-write access to the single
//!   counter row, implementing [`tally_core::CounterRepository`]
//! - **SessionFactory**: opens configured SQLite connections
//! - **Config**: JSON configuration with defaults
//! - **Persistence**: default paths and secure file I/O helpers
//!
//! ## Usage
//!
//! ```ignore
//! use tally_store::{CounterStore, SqliteSessionFactory};
//!
//! let sessions = SqliteSessionFactory::new("counter.db")?;
//! let store = CounterStore::new(sessions);
//!
//! assert_eq!(store.increment()?, 1);
//! assert_eq!(store.get_current_value()?, 1);
//! ```

pub mod config;
pub mod counter_store;
pub mod error;
pub mod persistence;
pub mod schema;
pub mod session;

pub use config::{Config, GeneralConfig, LogLevel, ServerConfig, StorageConfig};
pub use counter_store::CounterStore;
pub use error::StoreError;
pub use persistence::{
    default_config_dir, default_config_path, default_data_dir, default_database_path, ensure_dir,
    load_json, save_json,
};
pub use session::{SessionFactory, SqliteSessionFactory};
