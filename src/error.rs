//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that stop a generation run
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date {value:?} in {source_file:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        source_file: PathBuf,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Home page not found: {0:?}")]
    MissingHomePage(PathBuf),

    #[error("File already exists: {0:?}")]
    PostExists(PathBuf),

    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
