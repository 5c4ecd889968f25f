//! CLI output formatting tests.
//!
//! These tests verify that CLI output is correctly formatted for both
//! text and JSON output modes.

#[cfg(test)]
mod text_formatter_tests {
    use super::super::text::TextFormatter;
    use chrono::{TimeZone, Utc};
    use tally_core::{CounterAction, CounterRecord};

    fn record(value: i64) -> CounterRecord {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        CounterRecord::new(value, at)
    }

    #[test]
    fn test_record_plain() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.format_record(&record(42), false), "Counter: 42");
    }

    #[test]
    fn test_record_negative() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.format_record(&record(-7), false), "Counter: -7");
    }

    #[test]
    fn test_record_verbose_adds_timestamps() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_record(&record(1), true);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Created: "));
        assert!(lines[2].starts_with("Updated: "));
    }

    #[test]
    fn test_action_messages() {
        let formatter = TextFormatter::new(false);
        assert_eq!(
            formatter.format_action(CounterAction::Increment, 3),
            "Counter incremented to 3"
        );
        assert_eq!(
            formatter.format_action(CounterAction::Decrement, -1),
            "Counter decremented to -1"
        );
        assert_eq!(
            formatter.format_action(CounterAction::Reset, 0),
            "Counter reset to 0"
        );
    }

    #[test]
    fn test_colors_only_when_enabled() {
        let colored = TextFormatter::new(true).format_action(CounterAction::Increment, 1);
        assert!(colored.contains("\x1b[32m"));
        assert!(colored.ends_with("\x1b[0m"));

        let plain = TextFormatter::new(false).format_record(&record(5), false);
        assert!(!plain.contains('\x1b'));
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::{ActionOutput, CounterOutput, JsonFormatter};
    use chrono::{TimeZone, Utc};
    use tally_core::{CounterAction, CounterRecord};

    #[test]
    fn test_format_pretty_json() {
        let formatter = JsonFormatter::new(true);

        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();

        assert!(output.contains('\n'));
        assert!(output.contains("  "));
    }

    #[test]
    fn test_format_compact_json() {
        let formatter = JsonFormatter::new(false);

        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();

        assert_eq!(output, r#"{"key":"value"}"#);
    }

    #[test]
    fn test_counter_output_fields() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let record = CounterRecord::new(9, at);

        let output = JsonFormatter::new(false)
            .format(&CounterOutput::from(&record))
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["value"], 9);
        assert_eq!(parsed["createdAt"], "2024-03-01T12:00:00+00:00");
        assert_eq!(parsed["updatedAt"], "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_action_output() {
        let output = JsonFormatter::new(false)
            .format(&ActionOutput {
                action: CounterAction::Decrement,
                value: -2,
            })
            .unwrap();

        assert_eq!(output, r#"{"action":"decrement","value":-2}"#);
    }
}
