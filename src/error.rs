//! Error types for lobule.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`DiscretizeError`].
pub type Result<T> = std::result::Result<T, DiscretizeError>;

/// Errors that can occur while discretizing a surface or exporting the result.
#[derive(Error, Debug)]
pub enum DiscretizeError {
    /// Fewer than three positional arguments (delta, triangle bound, potential
    /// name) were supplied before the potential-specific parameter tail.
    #[error("not enough parameters: expected at least 3 (delta, max_triangles, potential), got {got}")]
    NotEnoughParameters {
        /// Number of positional arguments actually supplied.
        got: usize,
    },

    /// The requested potential name is not in the registry.
    #[error("unknown potential: {name}")]
    UnknownPotential {
        /// The unrecognized name.
        name: String,
    },

    /// The parameter count does not match the named potential's arity.
    #[error("wrong number of parameters for {name}: expected {expected}, got {got}")]
    BadArity {
        /// The potential name.
        name: &'static str,
        /// Human-readable expected count (e.g. "3 or 4").
        expected: &'static str,
        /// Number of parameters actually supplied.
        got: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error writing the mesh or table to a file.
    #[error("failed to save to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported output format.
    #[error("unsupported output format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}

impl DiscretizeError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        DiscretizeError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
