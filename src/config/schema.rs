//! Sources configuration schema.
//!
//! The on-disk format is YAML with kebab-case keys:
//!
//! ```yaml
//! sources-dir: src
//! auto-checkout:
//!   - pkgA
//! sources:
//!   pkgA:
//!     kind: git
//!     url: "https://example.org/pkgA.git"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::sources::{PackageSource, SourcesIndex};

/// One entry under `sources:`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SourceEntry {
    /// Source-control kind (e.g. `git`, `svn`, `hg`).
    pub kind: String,

    /// Repository URL.
    pub url: String,
}

/// Root of the sources configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SourcesConfig {
    /// Directory working copies are created under, relative to the project
    /// root unless absolute.
    #[serde(default = "default_sources_dir")]
    pub sources_dir: PathBuf,

    /// Names flagged for automatic checkout. Need not all exist in `sources`.
    #[serde(default)]
    pub auto_checkout: Vec<String>,

    /// The sources table, keyed by package name.
    #[serde(default)]
    pub sources: BTreeMap<String, SourceEntry>,
}

fn default_sources_dir() -> PathBuf {
    PathBuf::from("src")
}

impl SourcesConfig {
    /// Resolve the configuration against a project root into an index.
    pub fn into_index(self, project_root: &Path) -> SourcesIndex {
        let sources_dir = if self.sources_dir.is_absolute() {
            self.sources_dir
        } else {
            project_root.join(&self.sources_dir)
        };

        let sources = self.sources.into_iter().map(|(name, entry)| PackageSource {
            name,
            kind: entry.kind,
            url: entry.url,
        });

        SourcesIndex::new(sources, self.auto_checkout, sources_dir)
    }
}
