//! Error types for reading and validating the tracked lists.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid validator pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ListError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ListError::FileNotFound { path }
        } else {
            ListError::Read { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
