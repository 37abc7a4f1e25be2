//! Error types for the step guide library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all step guide operations.
///
/// Every variant is recoverable: callers are expected to report the message
/// and keep the application running.
#[derive(Error, Debug)]
pub enum GuideError {
    /// Note text was blank after trimming
    #[error("Note text cannot be empty")]
    EmptyInput,
    /// Edit or delete referenced a note that does not exist
    #[error("No note at position {position} (step has {count} notes)")]
    InvalidPosition { position: usize, count: usize },
    /// A step number or index outside the discovered sequence
    #[error("Step {number} does not exist ({count} steps available)")]
    InvalidStep { number: usize, count: usize },
    /// An image or description could not be read at render time
    #[error("Resource unavailable at '{path}': {source}")]
    ResourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl GuideError {
    /// Builds an `InvalidPosition` error for a note list of `count` entries.
    pub fn invalid_position(position: usize, count: usize) -> Self {
        Self::InvalidPosition { position, count }
    }
}

/// Extension trait attaching a path to I/O errors.
pub trait IoResultExt<T> {
    /// Map an I/O error into `GuideError::FileSystem` for `path`.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;

    /// Map an I/O error into `GuideError::ResourceUnavailable` for `path`.
    fn resource_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| GuideError::FileSystem {
            path: path.into(),
            source,
        })
    }

    fn resource_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| GuideError::ResourceUnavailable {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for step guide operations
pub type Result<T> = std::result::Result<T, GuideError>;
