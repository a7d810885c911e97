//! The package sources model.
//!
//! This module provides:
//! - [`PackageSource`] — one declared source package
//! - [`SourcesIndex`] — the sources table, auto-checkout set, and sources dir
//! - [`CheckoutStatus`] — the one-character status code shown by `list -s`
//! - [`PackageFilter`] (in [`filter`]) — regexp filtering over package names
//!
//! Everything here is immutable after construction; the index is built once
//! from configuration and queried for the rest of the invocation.

pub mod filter;

pub use filter::PackageFilter;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// A declared source package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSource {
    /// Package name, unique within the sources table.
    pub name: String,

    /// Source-control kind (e.g. `git`, `svn`, `hg`).
    pub kind: String,

    /// Repository URL the working copy is created from.
    pub url: String,
}

/// On-disk checkout status of a package relative to the auto-checkout set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStatus {
    /// In the auto-checkout set and checked out.
    AutoCheckedOut,
    /// Checked out, but not in the auto-checkout set.
    CheckedOut,
    /// In the auto-checkout set, but not checked out.
    MissingAuto,
    /// Available for checkout.
    Available,
}

impl CheckoutStatus {
    /// Derive the status from the two observable facts.
    pub fn derive(on_disk: bool, auto_checkout: bool) -> Self {
        match (on_disk, auto_checkout) {
            (true, true) => Self::AutoCheckedOut,
            (true, false) => Self::CheckedOut,
            (false, true) => Self::MissingAuto,
            (false, false) => Self::Available,
        }
    }

    /// The one-character code shown in `list -s` output.
    pub fn code(self) -> char {
        match self {
            Self::AutoCheckedOut => 'A',
            Self::CheckedOut => 'C',
            Self::MissingAuto => '!',
            Self::Available => ' ',
        }
    }
}

/// The sources table together with the auto-checkout set and sources dir.
///
/// Package iteration is always in ascending name order, which is the order
/// every listing is required to display.
#[derive(Debug, Clone, Default)]
pub struct SourcesIndex {
    sources: BTreeMap<String, PackageSource>,
    auto_checkout: BTreeSet<String>,
    sources_dir: PathBuf,
}

impl SourcesIndex {
    /// Build an index from its parts.
    ///
    /// The auto-checkout set may contain names that do not exist in the
    /// sources table; such entries are kept but never listed.
    pub fn new(
        sources: impl IntoIterator<Item = PackageSource>,
        auto_checkout: impl IntoIterator<Item = String>,
        sources_dir: PathBuf,
    ) -> Self {
        Self {
            sources: sources
                .into_iter()
                .map(|source| (source.name.clone(), source))
                .collect(),
            auto_checkout: auto_checkout.into_iter().collect(),
            sources_dir,
        }
    }

    /// Directory the working copies are created under.
    pub fn sources_dir(&self) -> &Path {
        &self.sources_dir
    }

    /// Look up a package by name.
    pub fn get(&self, name: &str) -> Option<&PackageSource> {
        self.sources.get(name)
    }

    /// Number of declared packages.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether any package is declared.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterate packages in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &PackageSource> {
        self.sources.values()
    }

    /// Whether the package is flagged for automatic checkout.
    pub fn is_auto_checkout(&self, name: &str) -> bool {
        self.auto_checkout.contains(name)
    }

    /// Whether a working copy for the package exists on disk.
    pub fn is_checked_out(&self, name: &str) -> bool {
        self.sources_dir.join(name).exists()
    }

    /// Status of a package as shown by `list -s`.
    pub fn status(&self, name: &str) -> CheckoutStatus {
        CheckoutStatus::derive(self.is_checked_out(name), self.is_auto_checkout(name))
    }
}
