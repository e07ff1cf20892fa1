//! Error types for resdir operations.
//!
//! This module defines [`ResdirError`], the primary error type used by the
//! CLI surface, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Resolution itself is infallible: it always terminates in a concrete path,
//! even when no probed directory exists. Errors only arise at the CLI
//! boundary, where `--check` turns a degraded result into a failure.
//!
//! - Use `ResdirError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ResdirError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for resdir operations.
#[derive(Debug, Error)]
pub enum ResdirError {
    /// A resolved path was required to exist on disk but does not.
    #[error("Path does not exist: {path}")]
    Missing { path: PathBuf },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for resdir operations.
pub type Result<T> = std::result::Result<T, ResdirError>;
