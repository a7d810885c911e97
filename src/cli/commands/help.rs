//! Help command implementation.
//!
//! `devout help` prints the usage banner and the command table, canonical
//! names sorted ascending with their aliases in parentheses. `devout help
//! <command>` prints that command's own option help; an unknown command name
//! falls back to the full banner. Help never fails.

use clap::CommandFactory;

use crate::cli::args::{parse_args, HelpArgs};
use crate::cli::registry::{Command, CommandRegistry, CommandResult, Context};
use crate::error::Result;
use crate::ui::Console;

/// The help command implementation.
pub struct HelpCommand;

fn print_usage(ctx: &Context, registry: &CommandRegistry, console: &mut dyn Console) {
    console.stdout(&format!("usage: {} <command> [options] [args]", ctx.prog));
    console.stdout("");
    console.stdout(&format!(
        "Type '{} help <command>' for help on a specific command.",
        ctx.prog
    ));
    console.stdout("");
    console.stdout("Available commands:");
    for entry in registry.entries_sorted() {
        if entry.aliases().is_empty() {
            console.stdout(&format!("    {}", entry.canonical()));
        } else {
            console.stdout(&format!(
                "    {} ({})",
                entry.canonical(),
                entry.aliases().join(", ")
            ));
        }
    }
}

impl Command for HelpCommand {
    fn help_text(&self) -> String {
        HelpArgs::command().render_long_help().to_string()
    }

    fn execute(
        &self,
        ctx: &Context,
        registry: &CommandRegistry,
        args: &[String],
        console: &mut dyn Console,
    ) -> Result<CommandResult> {
        let args = match parse_args::<HelpArgs>("help", args, console) {
            Ok(parsed) => parsed,
            Err(result) => return Ok(result),
        };

        match args.command.as_deref().and_then(|token| registry.resolve(token)) {
            Some(entry) => console.stdout(entry.command().help_text().trim_end()),
            None => print_usage(ctx, registry, console),
        }

        Ok(CommandResult::success())
    }
}
