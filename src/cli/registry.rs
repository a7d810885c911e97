//! Command infrastructure.
//!
//! This module provides:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`Context`] with the collaborators every command receives
//! - [`CommandRegistry`], the statically declared `(canonical, aliases)`
//!   table the dispatcher resolves tokens against
//!
//! Aliases are declared at registration time, so the canonical name used to
//! group them in help output is always deterministic.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::Result;
use crate::ui::Console;
use crate::vcs::CheckoutExecutor;

use super::commands::{checkout::CheckoutCommand, help::HelpCommand, list::ListCommand};

/// Collaborators shared by every command for one invocation.
pub struct Context<'a> {
    /// Project root the sources configuration is loaded from.
    pub project_root: PathBuf,

    /// Program name as invoked, used in usage hints.
    pub prog: String,

    /// Executor performing the actual working-copy creation.
    pub executor: &'a dyn CheckoutExecutor,
}

/// Trait for command implementations.
pub trait Command {
    /// Detailed option help, shown by `help <command>`.
    fn help_text(&self) -> String;

    /// Execute the command.
    ///
    /// `args` holds the CLI tokens after the command token itself. The
    /// registry is passed in so `help` can enumerate its peers.
    fn execute(
        &self,
        ctx: &Context,
        registry: &CommandRegistry,
        args: &[String],
        console: &mut dyn Console,
    ) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// A command together with the tokens it is registered under.
pub struct RegisteredCommand {
    canonical: &'static str,
    aliases: &'static [&'static str],
    command: Box<dyn Command>,
}

impl RegisteredCommand {
    /// The primary token, used to group aliases in help output.
    pub fn canonical(&self) -> &'static str {
        self.canonical
    }

    /// Alternative tokens resolving to the same command.
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// The command implementation.
    pub fn command(&self) -> &dyn Command {
        self.command.as_ref()
    }
}

/// Token → command table built once at startup.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<RegisteredCommand>,
    lookup: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard table: `checkout` (`co`), `help`, `list` (`ls`).
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("checkout", &["co"], Box::new(CheckoutCommand));
        registry.register("help", &[], Box::new(HelpCommand));
        registry.register("list", &["ls"], Box::new(ListCommand));
        registry
    }

    /// Register a command under its canonical token and aliases.
    ///
    /// Panics on a duplicate token; the table is static, so a collision is a
    /// programming error caught the first time the program runs.
    pub fn register(
        &mut self,
        canonical: &'static str,
        aliases: &'static [&'static str],
        command: Box<dyn Command>,
    ) {
        let index = self.entries.len();
        self.entries.push(RegisteredCommand {
            canonical,
            aliases,
            command,
        });
        for token in std::iter::once(canonical).chain(aliases.iter().copied()) {
            let previous = self.lookup.insert(token, index);
            assert!(previous.is_none(), "duplicate command token '{}'", token);
        }
    }

    /// Resolve a token (canonical or alias), case-sensitively.
    pub fn resolve(&self, token: &str) -> Option<&RegisteredCommand> {
        self.lookup.get(token).map(|&index| &self.entries[index])
    }

    /// Whether the token names a registered command.
    pub fn contains(&self, token: &str) -> bool {
        self.lookup.contains_key(token)
    }

    /// All entries in ascending canonical-name order.
    pub fn entries_sorted(&self) -> Vec<&RegisteredCommand> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by_key(|entry| entry.canonical);
        entries
    }
}
