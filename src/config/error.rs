//! Errors raised while resolving configuration.

use std::fmt::Write as _;
use std::path::PathBuf;

use thiserror::Error;

/// A single problem found in one field of a configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path of the offending field (e.g. `dependency.assets[0]`).
    pub path: String,
    /// What is wrong with it.
    pub message: String,
}

/// Configuration did not conform to its schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {subject}:{}", render_field_errors(.errors))]
pub struct ValidationError {
    /// What was being validated (`project configuration`, `dependency configuration`).
    pub subject: String,
    /// Every field-level problem, in discovery order.
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Returns `true` if any error was reported for exactly `path`.
    #[must_use]
    pub fn has_error_at(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }
}

fn render_field_errors(errors: &[FieldError]) -> String {
    let mut out = String::new();
    for error in errors {
        let _ = write!(out, "\n  - {}: {}", error.path, error.message);
    }
    out
}

/// Failure to produce a validated configuration.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The configuration was found but is invalid. Reported verbatim.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A configuration or manifest file could not be read.
    #[error("Failed to read {}: {message}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },

    /// A configuration or manifest file is not well-formed.
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying parser message.
        message: String,
    },

    /// The location of the `react-native` package could not be determined.
    #[error("{0}")]
    ReactNativePath(String),

    /// Installed packages could not be listed.
    #[error("Failed to list installed packages: {0}")]
    Packages(String),
}
