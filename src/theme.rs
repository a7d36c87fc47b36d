//! Terminal text styling for CLI output
//!
//! All color decisions live here so the rest of the crate formats plain
//! strings. `colored` downgrades to plain text on its own when stdout is
//! not a terminal.

use colored::Colorize;

pub struct Theme;

impl Theme {
    /// Highlight a count the user is watching tick up
    pub fn count(value: usize) -> String {
        value.to_string().green().to_string()
    }

    /// Highlight a value in a summary line
    pub fn value(text: &str) -> String {
        text.green().to_string()
    }

    /// Style a shell command for display
    pub fn command(text: &str) -> String {
        text.cyan().to_string()
    }

    /// De-emphasize streamed subprocess output
    pub fn muted(text: &str) -> String {
        text.dimmed().to_string()
    }

    /// Glyph prefixing the final success line
    pub fn success_icon() -> String {
        "✔".green().to_string()
    }

    /// Glyph prefixing the final error line
    pub fn error_icon() -> String {
        "✖".red().to_string()
    }
}
