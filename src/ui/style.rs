//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! falls back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

fn styled<T: Display>(text: T, paint: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        paint(&text)
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Configuration", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        styled(text, |t| t.bold().to_string())
    }

    /// Style for labels/keys (e.g., "endpoint", "timeout")
    pub fn label<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().to_string())
    }

    /// Style for primary values
    pub fn value<T: Display>(text: T) -> String {
        styled(text, |t| t.cyan().to_string())
    }

    /// Style for secondary/supplementary info (e.g., endpoints, timestamps)
    pub fn secondary<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().to_string())
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        styled(text, |t| t.green().to_string())
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        styled(text, |t| t.red().bold().to_string())
    }

    /// Style for commands (e.g., "/config", "/help")
    pub fn command<T: Display>(text: T) -> String {
        styled(text, |t| t.green().to_string())
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().italic().to_string())
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        styled(text, |t| t.dimmed().to_string())
    }

    /// Style for the user's sender label
    pub fn user<T: Display>(text: T) -> String {
        styled(text, |t| t.blue().bold().to_string())
    }

    /// Style for the bot's sender label
    pub fn bot<T: Display>(text: T) -> String {
        styled(text, |t| t.magenta().bold().to_string())
    }
}
