use std::{io, path::PathBuf};
use thiserror::Error;

/// Fatal failures of a run. Each one ends the process with exit status 1.
#[derive(Debug, Error)]
pub enum SalesError {
    #[error("{0}")]
    Usage(String),
    #[error("The file {} was not found.", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not read file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to decode JSON in file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not print results: {0}")]
    Console(#[source] io::Error),
    #[error("Could not write results to {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SalesError {
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            SalesError::FileNotFound { path, source }
        } else {
            SalesError::Unreadable { path, source }
        }
    }
}
