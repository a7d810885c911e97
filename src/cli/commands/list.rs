//! List command implementation.
//!
//! `devout list` (alias `ls`) prints the declared packages in ascending name
//! order, optionally filtered by regexps, restricted to the auto-checkout
//! set, annotated with kind and URL, or prefixed with a one-character
//! checkout-status code.

use clap::CommandFactory;

use crate::cli::args::{parse_args, ListArgs};
use crate::cli::registry::{Command, CommandRegistry, CommandResult, Context};
use crate::config::load_sources;
use crate::error::Result;
use crate::sources::PackageFilter;
use crate::ui::Console;

/// The list command implementation.
pub struct ListCommand;

impl Command for ListCommand {
    fn help_text(&self) -> String {
        ListArgs::command().render_long_help().to_string()
    }

    fn execute(
        &self,
        ctx: &Context,
        _registry: &CommandRegistry,
        args: &[String],
        console: &mut dyn Console,
    ) -> Result<CommandResult> {
        let args = match parse_args::<ListArgs>("list", args, console) {
            Ok(parsed) => parsed,
            Err(result) => return Ok(result),
        };

        let index = load_sources(&ctx.project_root)?;
        // No patterns means show everything.
        let filter = PackageFilter::permissive(&args.patterns)?;

        for package in index.iter() {
            if !filter.matches(&package.name) {
                continue;
            }
            if args.auto_checkout && !index.is_auto_checkout(&package.name) {
                continue;
            }

            let mut line = String::new();
            if args.status {
                line.push(index.status(&package.name).code());
                line.push(' ');
            }
            if args.long {
                line.push_str(&format!(
                    "({}) {} {}",
                    package.kind, package.name, package.url
                ));
            } else {
                line.push_str(&package.name);
            }
            console.stdout(&line);
        }

        Ok(CommandResult::success())
    }
}
