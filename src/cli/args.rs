//! CLI argument definitions.
//!
//! This module defines the per-command arguments using clap's derive macros.
//! Each command owns its own small parser; the first token has already been
//! consumed by the dispatcher before these run. clap also renders the option
//! help shown by `help <command>`.

use clap::Parser;

use crate::cli::registry::CommandResult;
use crate::ui::Console;

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "list",
    about = "List the available packages, filtered if regexps are given."
)]
pub struct ListArgs {
    /// Only show packages in the auto-checkout list
    #[arg(short = 'a', long)]
    pub auto_checkout: bool,

    /// Show kind and URL of each package
    #[arg(short = 'l', long)]
    pub long: bool,

    /// Show the checkout status
    #[arg(
        short = 's',
        long,
        long_help = "Show the checkout status.\n\
            The first column in the output shows the checkout status:\n    \
            ' ' available for checkout\n    \
            'A' in auto-checkout list and checked out\n    \
            'C' not in auto-checkout list, but checked out\n    \
            '!' in auto-checkout list, but not checked out"
    )]
    pub status: bool,

    /// Regular expressions matched anywhere in the package name
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,
}

/// Arguments for the `checkout` command.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "checkout",
    about = "Make a checkout of the packages matching the regular expressions."
)]
pub struct CheckoutArgs {
    /// Regular expressions matched anywhere in the package name
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,
}

/// Arguments for the `help` command.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "help",
    about = "Show help on the given command or about the whole program if none given."
)]
pub struct HelpArgs {
    /// Command to show help for
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,
}

/// Parse a command's arguments, reporting clap output through the console.
///
/// `--help` and similar display requests go to stdout and count as success;
/// genuine usage errors are reported at error level with exit code 1. The
/// `Err` side carries the finished [`CommandResult`] for the caller to return.
pub fn parse_args<T: Parser>(
    canonical: &str,
    args: &[String],
    console: &mut dyn Console,
) -> std::result::Result<T, CommandResult> {
    let argv = std::iter::once(canonical.to_string()).chain(args.iter().cloned());
    match T::try_parse_from(argv) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            use clap::error::ErrorKind;
            let rendered = err.render().to_string();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    console.stdout(rendered.trim_end());
                    Err(CommandResult::success())
                }
                _ => {
                    let message = rendered.trim_start_matches("error: ").trim_end();
                    console.error(message);
                    Err(CommandResult::failure(1))
                }
            }
        }
    }
}
