//! Mock console implementation for testing.
//!
//! `MockConsole` implements the `Console` trait and captures all output
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use devout::ui::{Console, MockConsole};
//!
//! let mut console = MockConsole::new();
//!
//! // Use console in code under test...
//! console.stdout("pkgA");
//! console.warning("Don't forget to run the build again.");
//!
//! // Assert on captured output
//! assert_eq!(console.lines(), ["pkgA"]);
//! assert!(console.warnings()[0].contains("build"));
//! ```

use super::Console;

/// Mock console implementation for testing.
///
/// Captures stdout lines and leveled messages in separate buffers.
#[derive(Debug, Default)]
pub struct MockConsole {
    lines: Vec<String>,
    infos: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockConsole {
    /// Create a new empty MockConsole.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured stdout lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get all captured info messages.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All stdout lines joined with newlines, as a terminal would show them.
    pub fn stdout_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Console for MockConsole {
    fn stdout(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
