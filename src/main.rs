//! Devout CLI entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use devout::cli::{Context, Dispatcher};
use devout::config::find_project_root;
use devout::ui::TerminalConsole;
use devout::vcs::VcsCheckout;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for diagnostics.
///
/// Diagnostics go to standard error so listings on standard output stay
/// machine-readable. Level is controlled by `RUST_LOG`; default is WARN.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devout=warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let mut argv = std::env::args();
    let argv0 = argv.next();
    let prog = argv0
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "devout".to_string());
    let args: Vec<String> = argv.collect();

    tracing::debug!("Starting {} with args: {:?}", prog, args);

    // Commands that need no configuration must work from anywhere, so a
    // missing project root falls back to the working directory itself.
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_root = find_project_root(&cwd).unwrap_or(cwd);

    let executor = VcsCheckout::new();
    let ctx = Context {
        project_root,
        prog,
        executor: &executor,
    };

    let mut console = TerminalConsole::new();
    let result = Dispatcher::new().dispatch(&ctx, &args, &mut console);
    ExitCode::from(result.exit_code as u8)
}
