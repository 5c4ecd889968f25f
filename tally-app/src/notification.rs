//! Transient notifications shown after each button press.

use serde::Serialize;
use std::fmt::Display;
use tally_core::CounterAction;

/// Notification severity, which also selects its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Increment succeeded.
    Positive,
    /// Decrement succeeded.
    Info,
    /// Reset succeeded.
    Warning,
    /// The store reported an error.
    Negative,
}

/// A toast message for the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Severity.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
}

impl Notification {
    /// Notification for a successful action that produced `value`.
    pub fn success(action: CounterAction, value: i64) -> Self {
        match action {
            CounterAction::Increment => Self {
                kind: NotificationKind::Positive,
                message: format!("Counter incremented to {value}"),
            },
            CounterAction::Decrement => Self {
                kind: NotificationKind::Info,
                message: format!("Counter decremented to {value}"),
            },
            CounterAction::Reset => Self {
                kind: NotificationKind::Warning,
                message: "Counter reset to 0".to_string(),
            },
        }
    }

    /// Notification for a failed action, carrying the error description.
    pub fn failure(action: CounterAction, error: &dyn Display) -> Self {
        Self {
            kind: NotificationKind::Negative,
            message: format!("Error {} counter: {}", action.gerund(), error),
        }
    }

    /// Returns true for error notifications.
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_messages() {
        let inc = Notification::success(CounterAction::Increment, 4);
        assert_eq!(inc.kind, NotificationKind::Positive);
        assert_eq!(inc.message, "Counter incremented to 4");

        let dec = Notification::success(CounterAction::Decrement, -1);
        assert_eq!(dec.kind, NotificationKind::Info);
        assert_eq!(dec.message, "Counter decremented to -1");

        let reset = Notification::success(CounterAction::Reset, 0);
        assert_eq!(reset.kind, NotificationKind::Warning);
        assert_eq!(reset.message, "Counter reset to 0");
    }

    #[test]
    fn test_failure_message() {
        let n = Notification::failure(CounterAction::Reset, &"database is locked");
        assert!(n.is_error());
        assert_eq!(n.message, "Error resetting counter: database is locked");
    }

    #[test]
    fn test_serializes_kind_in_snake_case() {
        let n = Notification::success(CounterAction::Increment, 1);
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["kind"], "positive");
        assert_eq!(json["message"], "Counter incremented to 1");
    }
}
