//! Error type shared by the library.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("directory '{}' does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

impl Error {
    /// True when the descriptor was read but its contents are not valid JSON
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::Json(e) if e.is_syntax() || e.is_eof())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
