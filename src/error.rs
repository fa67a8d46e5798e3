//! Error types for sidenav.

use std::path::PathBuf;
use thiserror::Error;

/// A menu entry that cannot be rendered unambiguously.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidEntry {
    /// Two entries share a path, so their links would share a key.
    #[error("entry {index} reuses path '{path}' from entry {first}")]
    DuplicatePath {
        /// Index of the first entry with this path.
        first: usize,
        /// Index of the offending entry.
        index: usize,
        /// The shared path.
        path: String,
    },

    /// Path is empty.
    #[error("entry {index} has an empty path")]
    EmptyPath {
        /// Index of the offending entry.
        index: usize,
    },

    /// Label or path carries leading/trailing whitespace.
    #[error("entry {index} has leading/trailing whitespace in its {field}")]
    Whitespace {
        /// Index of the offending entry.
        index: usize,
        /// `"label"` or `"path"`.
        field: &'static str,
    },
}

impl InvalidEntry {
    /// Index of the entry that was rejected.
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            Self::DuplicatePath { index, .. }
            | Self::EmptyPath { index }
            | Self::Whitespace { index, .. } => *index,
        }
    }
}

/// The main error type for sidenav operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A menu entry failed validation.
    #[error("invalid menu entry: {0}")]
    InvalidEntry(#[from] InvalidEntry),

    /// Menu definition could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read a menu definition.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Template rendering failed.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

/// A specialized Result type for sidenav operations.
pub type Result<T> = std::result::Result<T, Error>;
