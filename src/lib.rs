//! Devout - source package checkout helper.
//!
//! Devout keeps a project's external source packages declared in one place
//! (`.devout/sources.yml`) and gives developers a small CLI to list them,
//! inspect their on-disk checkout status, and check them out by regular
//! expression.
//!
//! # Modules
//!
//! - [`cli`] - Command registry, dispatcher, and the command implementations
//! - [`config`] - Sources configuration discovery and loading
//! - [`error`] - Error types and result alias
//! - [`sources`] - The package sources model and name filtering
//! - [`ui`] - Console abstraction for user-facing output
//! - [`vcs`] - Working-copy creation via the version-control binaries
//!
//! # Example
//!
//! ```
//! use devout::sources::PackageFilter;
//!
//! // `list` semantics: no patterns means everything matches
//! let filter = PackageFilter::permissive(&[]).unwrap();
//! assert!(filter.matches("any.package"));
//!
//! // `checkout` semantics: patterns are combined into one alternation
//! let patterns = vec!["^core".to_string(), "util".to_string()];
//! let filter = PackageFilter::any_of(&patterns).unwrap();
//! assert!(filter.matches("core.app"));
//! assert!(filter.matches("shared.utils"));
//! assert!(!filter.matches("docs"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod sources;
pub mod ui;
pub mod vcs;

pub use error::{DevoutError, Result};
