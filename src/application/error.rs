//! Application-level errors
//!
//! The parsing core is total; errors exist only at the input-acquisition
//! boundary (missing files, undecodable bytes, bad configuration).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("export is not valid UTF-8: {0}")]
    InvalidEncoding(PathBuf),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
