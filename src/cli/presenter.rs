//! CLI presenter for status output
//!
//! Everything here goes to stderr; stdout only ever carries the
//! announcement itself.

use colored::*;

/// Presenter for CLI output formatting
#[derive(Debug, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{}", self.format_warn(message));
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format_error(message));
    }

    fn format_warn(&self, message: &str) -> String {
        format!("{} {}", "⚠".yellow(), message)
    }

    fn format_error(&self, message: &str) -> String {
        format!("{} {}", "✗".red(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_keeps_message() {
        let line = Presenter::new().format_warn("config ignored");
        assert!(line.contains("⚠"));
        assert!(line.ends_with("config ignored"));
    }

    #[test]
    fn error_keeps_message() {
        let line = Presenter::new().format_error("notify-send not found");
        assert!(line.contains("✗"));
        assert!(line.ends_with("notify-send not found"));
    }
}
