//! Domain models for Tally.
//!
//! ## Submodules
//!
//! - [`counter`] - The persisted counter record
//! - [`action`] - User actions bound to the page buttons

mod action;
mod counter;

// Re-export everything at the models level
pub use action::CounterAction;
pub use counter::CounterRecord;
