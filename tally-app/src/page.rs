//! HTML rendering for the counter page.
//!
//! The page is server-rendered with the current value; button presses go
//! through `POST /api/counter/{action}` and the inline script applies the
//! returned value and notification. A failed action never touches the display.

use std::fmt::Write;

use tally_core::CounterAction;

use crate::theme::Theme;
use crate::view::CounterView;

/// Page title.
pub const TITLE: &str = "Counter App";

/// Subtitle under the heading.
pub const SUBTITLE: &str = "A simple, elegant counter";

/// Marker on the element showing the value.
pub const DISPLAY_MARKER: &str = "counter-display";

/// How long a notification stays visible.
const NOTIFICATION_TIMEOUT_MS: u32 = 3000;

const STYLE: &str = r#"
body { margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center;
       font-family: system-ui, -apple-system, sans-serif; background: #f8fafc; }
.card { background: #fff; border-radius: 16px; box-shadow: 0 10px 30px rgba(15, 23, 42, 0.12);
        padding: 48px 64px; text-align: center; }
h1 { color: var(--primary); margin: 0 0 4px; }
.subtitle { color: var(--secondary); margin: 0 0 32px; }
.display { font-size: 96px; font-weight: 700; color: var(--primary); margin-bottom: 32px; }
.buttons { display: flex; gap: 16px; justify-content: center; }
button { border: 0; border-radius: 8px; color: #fff; font-size: 20px; padding: 12px 28px; cursor: pointer; }
button.decrement { background: var(--negative); }
button.increment { background: var(--positive); }
button.reset { background: var(--secondary); }
#toast { position: fixed; top: 24px; right: 24px; color: #fff; padding: 12px 20px; border-radius: 8px;
         opacity: 0; transition: opacity 0.2s; }
#toast.visible { opacity: 1; }
#toast.positive { background: var(--positive); }
#toast.info { background: var(--info); }
#toast.warning { background: var(--warning); }
#toast.negative { background: var(--negative); }
"#;

const SCRIPT: &str = r#"
const display = document.querySelector('[data-marker="counter-display"]');
const toast = document.getElementById('toast');
let toastTimer = null;

function notify(notification) {
  toast.textContent = notification.message;
  toast.className = 'visible ' + notification.kind;
  clearTimeout(toastTimer);
  toastTimer = setTimeout(() => { toast.className = ''; }, Number(toast.dataset.timeout));
}

async function dispatch(action) {
  try {
    const response = await fetch('/api/counter/' + action, { method: 'POST' });
    const outcome = await response.json();
    if (outcome.value !== null && outcome.value !== undefined) {
      display.textContent = String(outcome.value);
    }
    if (outcome.notification) {
      notify(outcome.notification);
    } else {
      notify({ kind: 'negative', message: outcome.error ? outcome.error.message : 'Request failed' });
    }
  } catch (err) {
    notify({ kind: 'negative', message: 'Error ' + action + ': ' + err });
  }
}

document.querySelectorAll('button[data-action]').forEach((button) => {
  button.addEventListener('click', () => dispatch(button.dataset.action));
});
"#;

/// Renders the full page for `view`.
pub fn render(view: &CounterView, theme: &Theme) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{TITLE}</title>");
    let _ = writeln!(html, "<style>{}{}</style>", theme.css_variables(), STYLE);
    html.push_str("</head>\n<body>\n<main class=\"card\">\n");
    let _ = writeln!(html, "<h1>{TITLE}</h1>");
    let _ = writeln!(html, "<p class=\"subtitle\">{SUBTITLE}</p>");
    let _ = writeln!(
        html,
        "<div class=\"display\" data-marker=\"{DISPLAY_MARKER}\">{}</div>",
        view.display()
    );
    html.push_str("<div class=\"buttons\">\n");
    for &action in CounterAction::all() {
        html.push_str(&button(action));
    }
    html.push_str("</div>\n</main>\n");
    let _ = writeln!(
        html,
        "<div id=\"toast\" role=\"status\" data-timeout=\"{NOTIFICATION_TIMEOUT_MS}\"></div>"
    );
    let _ = writeln!(html, "<script>{SCRIPT}</script>");
    html.push_str("</body>\n</html>\n");
    html
}

fn button(action: CounterAction) -> String {
    format!(
        "<button type=\"button\" class=\"{name}\" data-action=\"{name}\" data-marker=\"{marker}\">{label}</button>\n",
        name = action.as_str(),
        marker = action.marker(),
        label = action.label(),
    )
}
