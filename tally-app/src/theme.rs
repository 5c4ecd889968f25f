//! Page color scheme.

use crate::notification::NotificationKind;

/// Colors used by the counter page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Professional blue; headings and the counter display.
    pub primary: &'static str,
    /// Subtle gray; the reset button and subtitle.
    pub secondary: &'static str,
    /// Success green.
    pub accent: &'static str,
    /// Positive notifications and the increment button.
    pub positive: &'static str,
    /// Error notifications and the decrement button.
    pub negative: &'static str,
    /// Warning notifications.
    pub warning: &'static str,
    /// Info notifications.
    pub info: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#2563eb",
            secondary: "#64748b",
            accent: "#10b981",
            positive: "#10b981",
            negative: "#ef4444",
            warning: "#f59e0b",
            info: "#3b82f6",
        }
    }
}

impl Theme {
    /// Returns the background color for a notification.
    pub fn notification_color(&self, kind: NotificationKind) -> &'static str {
        match kind {
            NotificationKind::Positive => self.positive,
            NotificationKind::Info => self.info,
            NotificationKind::Warning => self.warning,
            NotificationKind::Negative => self.negative,
        }
    }

    /// Renders the palette as CSS custom properties on `:root`.
    pub fn css_variables(&self) -> String {
        format!(
            ":root {{ --primary: {}; --secondary: {}; --accent: {}; \
             --positive: {}; --negative: {}; --warning: {}; --info: {}; }}",
            self.primary,
            self.secondary,
            self.accent,
            self.notification_color(NotificationKind::Positive),
            self.notification_color(NotificationKind::Negative),
            self.notification_color(NotificationKind::Warning),
            self.notification_color(NotificationKind::Info),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_colors() {
        let theme = Theme::default();
        assert_eq!(theme.notification_color(NotificationKind::Negative), "#ef4444");
        assert_eq!(theme.notification_color(NotificationKind::Warning), "#f59e0b");
    }

    #[test]
    fn test_css_variables() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--primary: #2563eb;"));
        assert!(css.contains("--info: #3b82f6;"));
    }
}
