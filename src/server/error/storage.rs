use std::path::PathBuf;

use thiserror::Error;

/// Failures of the thesis file store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failure to create a storage directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure to write an uploaded file.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure to move a staged file into the published area.
    #[error("Failed to move '{from}' to '{to}': {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file recorded for a thesis is not in the storage area.
    #[error("Stored file '{0}' does not exist")]
    Missing(PathBuf),

    /// Failure to delete a stored file.
    #[error("Failed to remove '{path}': {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored file name that would escape its storage directory.
    #[error("Invalid stored file name '{0}'")]
    InvalidFileName(String),
}
