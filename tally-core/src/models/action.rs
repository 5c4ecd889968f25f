//! User actions on the counter.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// One of the three triggers exposed on the counter page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterAction {
    /// Add one.
    Increment,
    /// Subtract one. There is no floor.
    Decrement,
    /// Set back to zero.
    Reset,
}

impl CounterAction {
    /// All actions, in page order.
    pub fn all() -> &'static [CounterAction] {
        &[
            CounterAction::Decrement,
            CounterAction::Increment,
            CounterAction::Reset,
        ]
    }

    /// Returns the action name used in URLs and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Reset => "reset",
        }
    }

    /// Returns the stable marker used to address the control in tests.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Increment => "increment-button",
            Self::Decrement => "decrement-button",
            Self::Reset => "reset-button",
        }
    }

    /// Returns the button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Increment => "+",
            Self::Decrement => "\u{2212}",
            Self::Reset => "Reset",
        }
    }

    /// Returns the verb used in notification messages.
    pub fn past_tense(&self) -> &'static str {
        match self {
            Self::Increment => "incremented",
            Self::Decrement => "decremented",
            Self::Reset => "reset",
        }
    }

    /// Returns the gerund used in error messages ("Error incrementing counter").
    pub fn gerund(&self) -> &'static str {
        match self {
            Self::Increment => "incrementing",
            Self::Decrement => "decrementing",
            Self::Reset => "resetting",
        }
    }
}

impl std::fmt::Display for CounterAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CounterAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "increment" | "inc" | "+" => Ok(Self::Increment),
            "decrement" | "dec" | "-" => Ok(Self::Decrement),
            "reset" => Ok(Self::Reset),
            other => Err(CoreError::InvalidAction(other.to_string())),
        }
    }
}
