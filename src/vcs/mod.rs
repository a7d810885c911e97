//! Working-copy creation.
//!
//! This module provides:
//! - [`CheckoutExecutor`] trait for performing checkouts
//! - [`VcsCheckout`] — the real implementation, spawning the VCS binary
//! - [`PackagesByKind`] — the grouped request the checkout command builds
//!
//! The executor owns every filesystem side effect of a checkout; the commands
//! above it only decide what to check out. Failures are reported as values,
//! and whatever an earlier package already wrote to disk is left in place.

use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;

use crate::error::{DevoutError, Result};

/// Checkout request: kind → (package name → repository URL).
pub type PackagesByKind = BTreeMap<String, BTreeMap<String, String>>;

/// Trait for performing checkouts.
///
/// This trait allows substituting a fake executor in tests.
pub trait CheckoutExecutor {
    /// Create working copies for every requested package under `target_dir`.
    fn checkout(&self, packages: &PackagesByKind, target_dir: &Path) -> Result<()>;
}

/// Executor that spawns the version-control binary for each package.
#[derive(Debug, Default)]
pub struct VcsCheckout;

impl VcsCheckout {
    /// Create a new VCS executor.
    pub fn new() -> Self {
        Self
    }

    /// Command line for one checkout, or None for an unrecognized kind.
    fn command_for(kind: &str, url: &str, destination: &Path) -> Option<Command> {
        let mut cmd = match kind {
            "git" => {
                let mut cmd = Command::new("git");
                cmd.arg("clone");
                cmd
            }
            "svn" => {
                let mut cmd = Command::new("svn");
                cmd.arg("checkout");
                cmd
            }
            "hg" => {
                let mut cmd = Command::new("hg");
                cmd.arg("clone");
                cmd
            }
            _ => return None,
        };
        cmd.arg(url).arg(destination);
        Some(cmd)
    }
}

impl CheckoutExecutor for VcsCheckout {
    fn checkout(&self, packages: &PackagesByKind, target_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(target_dir)?;

        for (kind, names) in packages {
            for (name, url) in names {
                let destination = target_dir.join(name);
                if destination.exists() {
                    tracing::debug!("Skipping '{}', working copy already exists", name);
                    continue;
                }

                let Some(mut cmd) = Self::command_for(kind, url, &destination) else {
                    return Err(DevoutError::UnknownKind {
                        kind: kind.clone(),
                        package: name.clone(),
                    });
                };

                tracing::info!("Checking out '{}' from {}", name, url);
                let output = cmd.output().map_err(|err| DevoutError::CheckoutFailed {
                    package: name.clone(),
                    message: err.to_string(),
                })?;

                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    return Err(DevoutError::CheckoutFailed {
                        package: name.clone(),
                        message: stderr.trim().to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
