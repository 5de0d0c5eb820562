//! Domain error types for distro-tools using thiserror
//!
//! Every failure aborts the current generation run. Errors carry the offending
//! input (file path or document origin) and, for shape errors, the dotted key
//! path inside the document.
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for distro-tools operations
#[derive(Error, Debug)]
pub enum DistroError {
    /// An input document does not match the expected mapping-of-mappings shape
    #[error("Configuration error in {origin} at '{key_path}': {reason}")]
    Config {
        origin: String,
        key_path: String,
        reason: String,
    },

    /// Two top-level constant groups share a name
    #[error("Duplicate constant group '{name}' defined in {first} and {second}")]
    DuplicateGroup {
        name: String,
        first: String,
        second: String,
    },

    #[error("IO error during {operation} on {path}: {source}")]
    Io {
        operation: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON parsing failed in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("XML parsing failed in {origin}: {message}")]
    Xml { origin: String, message: String },

    #[error("Invalid form '{path}': {reason}")]
    Form { path: PathBuf, reason: String },

    #[error("Directory {path} doesn't exist or is not a directory")]
    MissingDirectory { path: PathBuf },

    #[error("Settings error: {message}")]
    Settings { message: String },
}

/// Result type alias for distro-tools operations
pub type DistroResult<T> = Result<T, DistroError>;

impl DistroError {
    /// Shape error inside a constants or metadata document
    pub fn config(
        origin: impl Into<String>,
        key_path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Config {
            origin: origin.into(),
            key_path: key_path.into(),
            reason: reason.into(),
        }
    }

    pub fn xml(origin: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Xml {
            origin: origin.into(),
            message: message.to_string(),
        }
    }

    pub fn form(path: &Path, reason: impl Into<String>) -> Self {
        Self::Form {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

/// Helper trait for attaching the operation and path to IO failures
pub trait IoContext<T> {
    fn io_context(self, operation: &str, path: &Path) -> DistroResult<T>;
}

impl<T> IoContext<T> for Result<T, io::Error> {
    fn io_context(self, operation: &str, path: &Path) -> DistroResult<T> {
        self.map_err(|source| DistroError::Io {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}
