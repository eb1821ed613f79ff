//! Error types for yugo operations.
//!
//! This module defines [`YugoError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The resolvers in [`crate::resolver`] are total and never return errors
//! - Use `YugoError` for catalog, selection, and process failures
//! - Use `anyhow::Error` (via `YugoError::Other`) for unexpected errors

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for yugo operations.
#[derive(Debug, Error)]
pub enum YugoError {
    /// Catalog file not found at expected location.
    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Failed to parse the catalog file.
    #[error("Failed to parse catalog at {path}: {message}")]
    CatalogParseError { path: PathBuf, message: String },

    /// The running OS has no platform key.
    #[error("Unsupported platform: {platform}")]
    UnsupportedPlatform { platform: String },

    /// No package manager from the catalog is installed on this machine.
    #[error("No package managers available for platform '{platform}'")]
    NoManagersAvailable { platform: String },

    /// A package manager was requested that is not available.
    #[error("Unknown or unavailable package manager: {name}")]
    UnknownManager { name: String },

    /// A tag was requested that no installable program carries.
    #[error("Unknown tag for the selected package manager: {tag}")]
    UnknownTag { tag: String },

    /// A prompt answer was required but none was given.
    #[error("A selection is required: {what}")]
    SelectionRequired { what: String },

    /// Shell command could not be started.
    #[error("Failed to start `{command}`: {source}")]
    CommandSpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Shell command exceeded its time limit and was killed.
    #[error("Command timed out after {timeout:?}: {command}")]
    CommandTimedOut { command: String, timeout: Duration },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for yugo operations.
pub type Result<T> = std::result::Result<T, YugoError>;
