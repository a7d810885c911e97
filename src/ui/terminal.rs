//! Terminal console implementation.

use std::io::Write;

use super::Console;

/// Console writing payload lines to stdout and leveled messages to stderr.
///
/// Diagnostic lines use the `"<LEVEL>: <message>"` format so scripts wrapping
/// devout can separate listings from status chatter by stream.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    /// Create a new terminal console.
    pub fn new() -> Self {
        Self
    }

    fn stderr_line(&self, level: &str, msg: &str) {
        // Ignore broken-pipe style failures; there is nowhere left to report them.
        let _ = writeln!(std::io::stderr(), "{}: {}", level, msg);
    }
}

impl Console for TerminalConsole {
    fn stdout(&mut self, line: &str) {
        let _ = writeln!(std::io::stdout(), "{}", line);
    }

    fn info(&mut self, msg: &str) {
        self.stderr_line("INFO", msg);
    }

    fn warning(&mut self, msg: &str) {
        self.stderr_line("WARNING", msg);
    }

    fn error(&mut self, msg: &str) {
        self.stderr_line("ERROR", msg);
    }
}
