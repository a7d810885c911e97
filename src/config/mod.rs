//! Sources configuration.
//!
//! This module handles finding, loading, and validating the sources
//! configuration (`.devout/sources.yml`), and turning it into a
//! [`SourcesIndex`](crate::sources::SourcesIndex).

pub mod loader;
pub mod schema;

pub use loader::{find_project_root, load_sources, sources_path};
pub use schema::{SourceEntry, SourcesConfig};
