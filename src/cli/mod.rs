//! Command-line interface.
//!
//! This module provides the command infrastructure:
//! - [`args`] — per-command argument definitions (clap derive)
//! - [`registry`] — the static command table with alias resolution
//! - [`dispatcher`] — first-token dispatch over the registry
//! - [`commands`] — the `list`, `checkout`, and `help` implementations
//!
//! Dispatch is deliberately not a clap subcommand tree: the first CLI token
//! is looked up case-sensitively in a statically declared
//! `(canonical, aliases) → command` table, so alias grouping in help output
//! never depends on how commands happen to be enumerated.

pub mod args;
pub mod commands;
pub mod dispatcher;
pub mod registry;

pub use args::{CheckoutArgs, HelpArgs, ListArgs};
pub use dispatcher::Dispatcher;
pub use registry::{Command, CommandRegistry, CommandResult, Context, RegisteredCommand};
