//! Error types for exercise-pack
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::template::PathError;

/// Result type alias for exercise-pack operations
pub type PackResult<T> = Result<T, PackError>;

/// Main error type for exercise-pack operations
#[derive(Error, Debug)]
pub enum PackError {
    /// Nothing to archive
    #[error("template set is empty - nothing to archive")]
    EmptyTemplateSet,

    /// Entry path failed validation
    #[error("invalid entry path '{path}': {reason}")]
    InvalidEntryPath { path: String, reason: PathError },

    /// Same entry path inserted twice
    #[error("duplicate entry path '{path}'")]
    DuplicateEntry { path: String },

    /// One entry is used as a directory by another
    #[error("entry path '{path}' conflicts with existing entry '{existing}'")]
    PathConflict { path: String, existing: String },

    /// Archive (or its temporary file) could not be created
    #[error("cannot create archive {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a single entry failed
    #[error("cannot write entry '{entry}' to {path}: {source}")]
    WriteEntry {
        path: PathBuf,
        entry: String,
        #[source]
        source: std::io::Error,
    },

    /// Central directory, sync or final rename failed
    #[error("cannot finish archive {path}: {source}")]
    Finish {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output exists and overwriting is disabled
    #[error("archive already exists: {path}")]
    OutputExists { path: PathBuf },

    /// Existing archive could not be read back
    #[error("cannot read archive {path}: {message}")]
    ReadArchive { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Template directory not found
    #[error("template directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Template file is not UTF-8 text
    #[error("template file is not valid UTF-8: {path}")]
    NonUtf8Template { path: PathBuf },

    /// Template file name cannot be stored as an entry name
    #[error("template file name is not valid UTF-8: {path}")]
    NonUtf8Path { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackError {
    /// Stable machine-readable code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            PackError::EmptyTemplateSet => "empty_template_set",
            PackError::InvalidEntryPath { .. } => "invalid_entry_path",
            PackError::DuplicateEntry { .. } => "duplicate_entry",
            PackError::PathConflict { .. } => "path_conflict",
            PackError::Create { .. } => "create_failed",
            PackError::WriteEntry { .. } => "write_failed",
            PackError::Finish { .. } => "finish_failed",
            PackError::OutputExists { .. } => "output_exists",
            PackError::ReadArchive { .. } => "read_failed",
            PackError::InvalidConfig { .. } => "invalid_config",
            PackError::DirectoryNotFound { .. } => "directory_not_found",
            PackError::NonUtf8Template { .. } => "non_utf8_template",
            PackError::NonUtf8Path { .. } => "non_utf8_path",
            PackError::Io(_) => "io",
        }
    }
}
