//! Error types for argument resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving pipeline arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// A referenced directory does not exist
    #[error("--{field}: directory '{}' does not exist", path.display())]
    MissingResource {
        /// Flag that referenced the directory.
        field: &'static str,
        /// The path that was checked.
        path: PathBuf,
    },

    /// A referenced path exists but is not a directory
    #[error("--{field}: '{}' is not a directory", path.display())]
    NotADirectory {
        /// Flag that referenced the path.
        field: &'static str,
        /// The path that was checked.
        path: PathBuf,
    },

    /// The filesystem check itself failed
    #[error("--{field}: could not access '{}': {message}", path.display())]
    Io {
        /// Flag that referenced the path.
        field: &'static str,
        /// The path that was checked.
        path: PathBuf,
        /// Error reported by the filesystem.
        message: String,
    },

    /// The calling layer supplied a context that breaks the key contract
    #[error("Context contract violation: {0}")]
    Context(#[from] ContextError),
}

impl ArgsError {
    /// Returns the flag name this error refers to, if any
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingResource { field, .. }
            | Self::NotADirectory { field, .. }
            | Self::Io { field, .. } => Some(*field),
            Self::Context(ContextError::MissingKey(key) | ContextError::TypeMismatch { key, .. }) => {
                Some(key.as_str())
            }
        }
    }
}

/// Errors raised by [`CliContext`](super::CliContext) accessors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// Key is not known to the context
    #[error("key '{0}' is not defined")]
    MissingKey(String),

    /// Key holds a value of a different type
    #[error("key '{key}' has the wrong type: {detail}")]
    TypeMismatch {
        /// The key that was read.
        key: String,
        /// Description of the mismatch.
        detail: String,
    },
}
