//! Counter page state.
//!
//! [`perform`] is the boundary where store errors are caught: it never fails,
//! it turns every result into an [`ActionOutcome`] the page can render.

use serde::Serialize;
use std::sync::Arc;
use tally_core::{CoreError, CounterAction, CounterRepository};
use tracing::{debug, error};

use crate::notification::Notification;

/// Result of one button press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    /// The action that was dispatched.
    pub action: CounterAction,
    /// New value on success; `None` if the store failed.
    pub value: Option<i64>,
    /// Toast to show.
    pub notification: Notification,
}

impl ActionOutcome {
    /// Returns true if the store accepted the action.
    pub fn is_success(&self) -> bool {
        self.value.is_some()
    }
}

/// Runs `action` against the store and describes the result.
pub fn perform(repo: &dyn CounterRepository, action: CounterAction) -> ActionOutcome {
    match repo.apply(action) {
        Ok(value) => {
            debug!(action = %action, value, "Action applied");
            ActionOutcome {
                action,
                value: Some(value),
                notification: Notification::success(action, value),
            }
        }
        Err(e) => {
            error!(action = %action, error = %e, "Error {} counter", action.gerund());
            ActionOutcome {
                action,
                value: None,
                notification: Notification::failure(action, &e),
            }
        }
    }
}

/// Display model for one open counter page.
///
/// Holds the last successfully rendered value; failed actions leave it alone.
pub struct CounterView {
    repo: Arc<dyn CounterRepository>,
    display: String,
    last_notification: Option<Notification>,
}

impl CounterView {
    /// Opens the page, reading the current value (creating the record if needed).
    ///
    /// # Errors
    ///
    /// Returns error if the initial read fails.
    pub fn load(repo: Arc<dyn CounterRepository>) -> Result<Self, CoreError> {
        let value = repo.get_current_value()?;
        Ok(Self {
            repo,
            display: value.to_string(),
            last_notification: None,
        })
    }

    /// Text currently shown in the counter display.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Most recent notification, if any button was pressed.
    pub fn last_notification(&self) -> Option<&Notification> {
        self.last_notification.as_ref()
    }

    /// Handles a button press and returns the notification to show.
    pub fn dispatch(&mut self, action: CounterAction) -> &Notification {
        let outcome = perform(self.repo.as_ref(), action);
        if let Some(value) = outcome.value {
            self.display = value.to_string();
        }
        self.last_notification.insert(outcome.notification)
    }
}

impl std::fmt::Debug for CounterView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterView")
            .field("display", &self.display)
            .field("last_notification", &self.last_notification)
            .finish_non_exhaustive()
    }
}
