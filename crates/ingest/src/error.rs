use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    /// A required source file or directory does not exist.
    #[error("Input not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Unsupported file format '{ext}': {}", .path.display())]
    UnsupportedFormat { path: PathBuf, ext: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
