//! Error types for tablerclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while probing package metadata.
///
/// A backend that is simply not installed is not represented here: absence
/// is a normal outcome and [`initialize`](crate::initialize) records it as
/// a skip rather than an error.
#[derive(Error, Debug)]
pub enum TablercError {
    /// Failed to query cargo metadata for a project
    #[error("failed to query cargo metadata: {0}")]
    CargoMetadata(String),

    /// No Cargo.toml at or under the given path
    #[error("no Cargo.toml found at: {0}")]
    ManifestNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
