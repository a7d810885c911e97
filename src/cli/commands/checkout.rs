//! Checkout command implementation.
//!
//! `devout checkout` (alias `co`) resolves the given regexps against the
//! sources table, groups the matches by source-control kind, and hands the
//! whole request to the checkout executor. The command itself never touches
//! the filesystem; on any failure the executor's partial work is left as is.

use clap::CommandFactory;

use crate::cli::args::{parse_args, CheckoutArgs};
use crate::cli::registry::{Command, CommandRegistry, CommandResult, Context};
use crate::config::load_sources;
use crate::error::{DevoutError, Result};
use crate::sources::PackageFilter;
use crate::ui::Console;
use crate::vcs::PackagesByKind;

/// The checkout command implementation.
pub struct CheckoutCommand;

/// Format a pattern list for humans: `'X'` or `'X', 'Y' or 'Z'`.
fn format_patterns(patterns: &[String]) -> String {
    match patterns {
        [] => String::new(),
        [single] => format!("'{}'", single),
        [head @ .., last] => {
            let quoted: Vec<String> = head.iter().map(|p| format!("'{}'", p)).collect();
            format!("{} or '{}'", quoted.join(", "), last)
        }
    }
}

impl Command for CheckoutCommand {
    fn help_text(&self) -> String {
        CheckoutArgs::command().render_long_help().to_string()
    }

    fn execute(
        &self,
        ctx: &Context,
        _registry: &CommandRegistry,
        args: &[String],
        console: &mut dyn Console,
    ) -> Result<CommandResult> {
        let args = match parse_args::<CheckoutArgs>("checkout", args, console) {
            Ok(parsed) => parsed,
            Err(result) => return Ok(result),
        };

        let index = load_sources(&ctx.project_root)?;
        let filter = PackageFilter::any_of(&args.patterns)?;

        let mut packages = PackagesByKind::new();
        for package in index.iter() {
            if !filter.matches(&package.name) {
                continue;
            }
            packages
                .entry(package.kind.clone())
                .or_default()
                .insert(package.name.clone(), package.url.clone());
        }

        if packages.is_empty() {
            return Err(DevoutError::NoMatch {
                patterns: format_patterns(&args.patterns),
            });
        }

        if let Err(err) = ctx.executor.checkout(&packages, index.sources_dir()) {
            console.error(&err.to_string());
            return Ok(CommandResult::failure(1));
        }

        console.warning(
            "Don't forget to run the build again, so the checked out packages are used as develop sources.",
        );
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockConsole;
    use crate::vcs::CheckoutExecutor;
    use std::cell::{Cell, RefCell};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Executor that records the request instead of touching disk.
    #[derive(Default)]
    struct RecordingExecutor {
        invoked: Cell<bool>,
        request: RefCell<Option<(PackagesByKind, PathBuf)>>,
        fail_with: RefCell<Option<String>>,
    }

    impl CheckoutExecutor for RecordingExecutor {
        fn checkout(&self, packages: &PackagesByKind, target_dir: &Path) -> Result<()> {
            self.invoked.set(true);
            *self.request.borrow_mut() = Some((packages.clone(), target_dir.to_path_buf()));
            if let Some(message) = self.fail_with.borrow().clone() {
                return Err(DevoutError::CheckoutFailed {
                    package: "pkgA".to_string(),
                    message,
                });
            }
            Ok(())
        }
    }

    fn context<'a>(root: &Path, executor: &'a RecordingExecutor) -> Context<'a> {
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

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const SOURCES: &str = r#"
sources:
  pkgA: { kind: git, url: url1 }
  pkgB: { kind: svn, url: url2 }
  pkgC: { kind: git, url: url3 }
"#;

    #[test]
    fn no_match_errors_without_invoking_executor() {
        let temp = setup_project(SOURCES);
        let executor = RecordingExecutor::default();
        let ctx = context(temp.path(), &executor);
        let registry = CommandRegistry::standard();
        let mut console = MockConsole::new();

        let err = CheckoutCommand
            .execute(&ctx, &registry, &argv(&["zzz"]), &mut console)
            .unwrap_err();

        assert_eq!(err.to_string(), "No package matched 'zzz'.");
        assert!(!executor.invoked.get());
    }

    #[test]
    fn no_match_names_every_pattern() {
        let temp = setup_project(SOURCES);
        let executor = RecordingExecutor::default();
        let ctx = context(temp.path(), &executor);
        let registry = CommandRegistry::standard();
        let mut console = MockConsole::new();

        let err = CheckoutCommand
            .execute(&ctx, &registry, &argv(&["x1", "x2", "x3"]), &mut console)
            .unwrap_err();

        assert_eq!(err.to_string(), "No package matched 'x1', 'x2' or 'x3'.");
    }

    #[test]
    fn matches_are_grouped_by_kind() {
        let temp = setup_project(SOURCES);
        let executor = RecordingExecutor::default();
        let ctx = context(temp.path(), &executor);
        let registry = CommandRegistry::standard();
        let mut console = MockConsole::new();

        let result = CheckoutCommand
            .execute(&ctx, &registry, &argv(&["pkg"]), &mut console)
            .unwrap();

        assert!(result.success);
        let request = executor.request.borrow();
        let (packages, target_dir) = request.as_ref().unwrap();
        assert_eq!(packages.len(), 2);
        assert_eq!(
            packages["git"].keys().map(|k| k.as_str()).collect::<Vec<_>>(),
            ["pkgA", "pkgC"]
        );
        assert_eq!(packages["svn"]["pkgB"], "url2");
        assert_eq!(target_dir, &temp.path().join("src"));
    }

    #[test]
    fn success_reminds_about_the_build() {
        let temp = setup_project(SOURCES);
        let executor = RecordingExecutor::default();
        let ctx = context(temp.path(), &executor);
        let registry = CommandRegistry::standard();
        let mut console = MockConsole::new();

        CheckoutCommand
            .execute(&ctx, &registry, &argv(&["pkgA"]), &mut console)
            .unwrap();

        assert_eq!(console.warnings().len(), 1);
        assert!(console.warnings()[0].contains("run the build again"));
    }

    #[test]
    fn executor_failure_is_reported_and_fails() {
        let temp = setup_project(SOURCES);
        let executor = RecordingExecutor::default();
        *executor.fail_with.borrow_mut() = Some("repository not found".to_string());
        let ctx = context(temp.path(), &executor);
        let registry = CommandRegistry::standard();
        let mut console = MockConsole::new();

        let result = CheckoutCommand
            .execute(&ctx, &registry, &argv(&["pkgA"]), &mut console)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(console.errors()[0].contains("repository not found"));
        assert!(console.warnings().is_empty());
    }

    #[test]
    fn missing_pattern_is_a_usage_error() {
        let temp = setup_project(SOURCES);
        let executor = RecordingExecutor::default();
        let ctx = context(temp.path(), &executor);
        let registry = CommandRegistry::standard();
        let mut console = MockConsole::new();

        let result = CheckoutCommand
            .execute(&ctx, &registry, &[], &mut console)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(!executor.invoked.get());
        assert!(!console.errors().is_empty());
    }

    #[test]
    fn format_patterns_single() {
        assert_eq!(format_patterns(&argv(&["foo"])), "'foo'");
    }

    #[test]
    fn format_patterns_two() {
        assert_eq!(format_patterns(&argv(&["a", "b"])), "'a' or 'b'");
    }

    #[test]
    fn format_patterns_many() {
        assert_eq!(format_patterns(&argv(&["a", "b", "c"])), "'a', 'b' or 'c'");
    }
}
