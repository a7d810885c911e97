//! Sources configuration discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::SourcesConfig;
use crate::error::{DevoutError, Result};
use crate::sources::SourcesIndex;

/// Path of the sources file inside a project root.
pub fn sources_path(project_root: &Path) -> PathBuf {
    project_root.join(".devout").join("sources.yml")
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.devout` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(".devout").is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load the sources configuration for a project root.
///
/// Returns [`DevoutError::ConfigNotFound`] when the file is absent and
/// [`DevoutError::ConfigParse`] when it does not deserialize.
pub fn load_sources(project_root: &Path) -> Result<SourcesIndex> {
    let path = sources_path(project_root);
    if !path.exists() {
        return Err(DevoutError::ConfigNotFound { path });
    }

    let raw = fs::read_to_string(&path)?;
    let config: SourcesConfig =
        serde_yaml::from_str(&raw).map_err(|err| DevoutError::ConfigParse {
            path: path.clone(),
            message: err.to_string(),
        })?;

    tracing::debug!(
        "Loaded {} sources from {}",
        config.sources.len(),
        path.display()
    );

    Ok(config.into_index(project_root))
}
