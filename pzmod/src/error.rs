//! Error types for `pzmod`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `pzmod` operations.
///
/// Only structural failures surface here. Content problems found while
/// checking a mod (missing descriptor fields, bad images, odd extensions)
/// are reported through [`crate::validate::ModValidationResult`] instead.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The mod root directory does not exist.
    #[error("mod directory not found: {path}")]
    ModRootNotFound {
        /// The path given as the mod root.
        path: PathBuf,
    },

    /// The `mod.info` descriptor could not be decoded as UTF-8 text.
    #[error("descriptor is not valid UTF-8 text: {path}")]
    DescriptorNotText {
        /// Path to the unreadable descriptor file.
        path: PathBuf,
    },

    /// A scaffold target already exists and will not be overwritten.
    #[error("file already exists: {path}")]
    FileExists {
        /// The conflicting path.
        path: PathBuf,
    },

    /// A file path could not be made relative to the mod root.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDir(String),

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err.to_string())
    }
}

/// A specialized Result type for `pzmod` operations.
pub type Result<T> = std::result::Result<T, Error>;
