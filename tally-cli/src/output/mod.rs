//! Output formatting for CLI.

mod json;
mod text;

pub use json::{ActionOutput, CounterOutput, JsonFormatter};
pub use text::TextFormatter;
#[cfg(test)]
mod tests;
