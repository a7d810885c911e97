//! User-facing output.
//!
//! This module provides:
//! - [`Console`] trait abstracting the two output channels
//! - [`TerminalConsole`] for real terminal usage
//! - [`MockConsole`] for capturing output in tests
//!
//! Payload output (package listings, help text) goes to standard output.
//! Diagnostics go to standard error as `"<LEVEL>: <message>"` lines. The
//! console is constructed once in `main` and passed into the dispatcher and
//! every command; nothing in the library holds a global logger.
//!
//! # Example
//!
//! ```
//! use devout::ui::{Console, MockConsole};
//!
//! let mut console = MockConsole::new();
//! console.stdout("pkgA");
//! console.error("No package matched 'zzz'.");
//!
//! assert_eq!(console.lines(), ["pkgA"]);
//! assert_eq!(console.errors(), ["No package matched 'zzz'."]);
//! ```

pub mod mock;
pub mod terminal;

pub use mock::MockConsole;
pub use terminal::TerminalConsole;

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait Console {
    /// Write a payload line to standard output.
    fn stdout(&mut self, line: &str);

    /// Report an informational message.
    fn info(&mut self, msg: &str);

    /// Report a warning.
    fn warning(&mut self, msg: &str);

    /// Report an error.
    fn error(&mut self, msg: &str);
}
