// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Tally App
//!
//! The counter web page.
//!
//! - **routes**: axum router serving the page and the JSON counter API
//! - **view**: display model and the action-to-notification mapping
//! - **page**: server-rendered HTML with the `data-marker` test hooks
//! - **server**: listener lifecycle with graceful shutdown

pub mod error;
pub mod logging;
pub mod notification;
pub mod page;
pub mod routes;
pub mod server;
pub mod shutdown;
pub mod theme;
pub mod view;

pub use error::AppError;
pub use logging::init_tracing;
pub use notification::{Notification, NotificationKind};
pub use routes::{AppState, build_router};
pub use server::AppServer;
pub use shutdown::ShutdownHandle;
pub use theme::Theme;
pub use view::{ActionOutcome, CounterView, perform};
