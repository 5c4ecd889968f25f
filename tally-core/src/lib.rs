// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Tally Core
//!
//! Core types, models, and traits for the Tally counter application.
//!
//! This crate provides the foundational abstractions shared by the store,
//! the web front end and the CLI:
//!
//! - Domain models (the persisted counter record, user actions)
//! - Error types
//! - The repository trait the presentation layer is written against
//!
//! ## Key Types
//!
//! - [`CounterRecord`] - The single persisted counter row
//! - [`CounterAction`] - The three user triggers (increment, decrement, reset)
//! - [`CounterRepository`] - Read-modify-write access to the counter
//! - [`CoreError`] - Error returned across the repository seam

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{CounterAction, CounterRecord};

// Re-export traits
pub use traits::CounterRepository;
