use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CinelogError {
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Lookup error: {0}")]
    Lookup(String),
}

impl CinelogError {
    /// A parse failure tied to a specific backing file.
    pub fn parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CinelogError>;
