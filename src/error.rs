//! Error types for devout operations.
//!
//! This module defines [`DevoutError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! Every error is terminal for the current invocation: the dispatcher turns it
//! into a single `ERROR:` line on standard error and a non-zero exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devout operations.
#[derive(Debug, Error)]
pub enum DevoutError {
    /// Sources configuration file not found at expected location.
    #[error("No sources configuration found at {path}.")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the sources configuration file.
    #[error("Failed to parse sources at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A package filter was built without any pattern.
    #[error("At least one package regexp is required.")]
    EmptyPatterns,

    /// A user-supplied pattern is not a valid regular expression.
    #[error("Invalid regexp '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A checkout request matched no package.
    ///
    /// `patterns` is pre-formatted for humans: `'X'` or `'X', 'Y' or 'Z'`.
    #[error("No package matched {patterns}.")]
    NoMatch { patterns: String },

    /// The sources table declares a kind no executor knows how to check out.
    #[error("Unknown source kind '{kind}' for package '{package}'.")]
    UnknownKind { kind: String, package: String },

    /// The VCS process for a package failed.
    #[error("Checkout of '{package}' failed: {message}")]
    CheckoutFailed { package: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devout operations.
pub type Result<T> = std::result::Result<T, DevoutError>;
