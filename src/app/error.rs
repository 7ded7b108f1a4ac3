use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while collecting the file structure or reading sources.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("The directory {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to resolve {}", path.display())]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to get file structure of {}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("Failed to read code from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
