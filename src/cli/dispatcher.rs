//! Command dispatching.
//!
//! The dispatcher reads the first CLI token, resolves it in the registry,
//! and runs the command with the remaining tokens. It owns the two terminal
//! non-command cases: no token at all (a hint, exit 0) and an unknown token
//! (an error, exit 1). Any error a command returns becomes a single `ERROR:`
//! line and exit 1.

use crate::ui::Console;

use super::registry::{CommandRegistry, CommandResult, Context};

/// Routes the first CLI token to a registered command.
pub struct Dispatcher {
    registry: CommandRegistry,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create a dispatcher over the standard command table.
    pub fn new() -> Self {
        Self {
            registry: CommandRegistry::standard(),
        }
    }

    /// Create a dispatcher over a custom registry.
    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// The registry commands are resolved against.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Dispatch and execute a command.
    ///
    /// `args` are the CLI tokens after the program name. Never panics or
    /// exits; the caller turns the result into the process exit code.
    pub fn dispatch(&self, ctx: &Context, args: &[String], console: &mut dyn Console) -> CommandResult {
        let Some((token, rest)) = args.split_first() else {
            console.info(&format!("Type '{} help' for usage.", ctx.prog));
            return CommandResult::success();
        };

        let Some(entry) = self.registry.resolve(token) else {
            console.error(&format!("Unknown command '{}'.", token));
            console.info(&format!("Type '{} help' for usage.", ctx.prog));
            return CommandResult::failure(1);
        };

        tracing::debug!("Dispatching '{}' as '{}'", token, entry.canonical());

        match entry.command().execute(ctx, &self.registry, rest, console) {
            Ok(result) => result,
            Err(err) => {
                console.error(&err.to_string());
                CommandResult::failure(1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockConsole;
    use crate::vcs::{CheckoutExecutor, PackagesByKind};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct NoopExecutor;

    impl CheckoutExecutor for NoopExecutor {
        fn checkout(&self, _packages: &PackagesByKind, _target_dir: &Path) -> crate::Result<()> {
            Ok(())
        }
    }

    fn context(root: &Path, executor: &'static dyn CheckoutExecutor) -> Context<'static> {
        Context {
            project_root: root.to_path_buf(),
            prog: "devout".to_string(),
            executor,
        }
    }

    fn setup_project(yaml: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".devout");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("sources.yml"), yaml).unwrap();
        temp
    }

    const SOURCES: &str = r#"
sources:
  pkgA: { kind: git, url: url1 }
  pkgB: { kind: svn, url: url2 }
"#;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_prints_hint_and_succeeds() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path(), &NoopExecutor);
        let mut console = MockConsole::new();

        let result = Dispatcher::new().dispatch(&ctx, &[], &mut console);

        assert_eq!(result.exit_code, 0);
        assert_eq!(console.infos(), ["Type 'devout help' for usage."]);
        assert!(console.errors().is_empty());
    }

    #[test]
    fn unknown_command_fails_with_hint() {
        let temp = TempDir::new().unwrap();
        let ctx = context(temp.path(), &NoopExecutor);
        let mut console = MockConsole::new();

        let result = Dispatcher::new().dispatch(&ctx, &argv(&["frobnicate"]), &mut console);

        assert_eq!(result.exit_code, 1);
        assert_eq!(console.errors(), ["Unknown command 'frobnicate'."]);
        assert_eq!(console.infos(), ["Type 'devout help' for usage."]);
    }

    #[test]
    fn alias_produces_identical_output() {
        let temp = setup_project(SOURCES);
        let ctx = context(temp.path(), &NoopExecutor);
        let dispatcher = Dispatcher::new();

        let mut via_list = MockConsole::new();
        let mut via_ls = MockConsole::new();
        dispatcher.dispatch(&ctx, &argv(&["list", "-s"]), &mut via_list);
        dispatcher.dispatch(&ctx, &argv(&["ls", "-s"]), &mut via_ls);

        assert_eq!(via_list.lines(), via_ls.lines());
        assert!(!via_list.lines().is_empty());
    }

    #[test]
    fn command_error_becomes_error_line_and_exit_1() {
        let temp = setup_project(SOURCES);
        let ctx = context(temp.path(), &NoopExecutor);
        let mut console = MockConsole::new();

        let result =
            Dispatcher::new().dispatch(&ctx, &argv(&["checkout", "zzz"]), &mut console);

        assert_eq!(result.exit_code, 1);
        assert_eq!(console.errors(), ["No package matched 'zzz'."]);
    }

    #[test]
    fn checkout_alias_dispatches_to_checkout() {
        let temp = setup_project(SOURCES);
        let ctx = context(temp.path(), &NoopExecutor);
        let mut via_co = MockConsole::new();
        let mut via_checkout = MockConsole::new();
        let dispatcher = Dispatcher::new();

        let r1 = dispatcher.dispatch(&ctx, &argv(&["co", "zzz"]), &mut via_co);
        let r2 = dispatcher.dispatch(&ctx, &argv(&["checkout", "zzz"]), &mut via_checkout);

        assert_eq!(r1.exit_code, r2.exit_code);
        assert_eq!(via_co.errors(), via_checkout.errors());
    }
}
