//! Text output formatting with colors.

use chrono::{DateTime, Local, Utc};
use tally_core::{CounterAction, CounterRecord};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats the counter record. Verbose output adds timestamps.
    pub fn format_record(&self, record: &CounterRecord, verbose: bool) -> String {
        let mut lines = vec![format!(
            "{} {}",
            self.dim("Counter:"),
            self.bold(&record.display_text())
        )];

        if verbose {
            lines.push(format!(
                "{} {}",
                self.dim("Created:"),
                format_timestamp(record.created_at)
            ));
            lines.push(format!(
                "{} {}",
                self.dim("Updated:"),
                format_timestamp(record.updated_at)
            ));
        }

        lines.join("\n")
    }

    /// Formats the result of an action, colored like the page notifications.
    pub fn format_action(&self, action: CounterAction, value: i64) -> String {
        let message = match action {
            CounterAction::Reset => "Counter reset to 0".to_string(),
            _ => format!("Counter {} to {}", action.past_tense(), value),
        };

        match action {
            CounterAction::Increment => self.paint(GREEN, &message),
            CounterAction::Decrement => self.paint(BLUE, &message),
            CounterAction::Reset => self.paint(YELLOW, &message),
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }
}

fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S%.6f")
        .to_string()
}
