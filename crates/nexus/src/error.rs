// File: src/error.rs
// Purpose: Error type shared by scanning, mirroring, emitting and watching

use std::path::PathBuf;
use thiserror::Error;

/// Errors from route table maintenance and artifact generation
#[derive(Error, Debug)]
pub enum NexusError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan page directory {root}: {source}")]
    Scan {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read entry template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render entry module: {0}")]
    Render(#[from] tera::Error),

    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl NexusError {
    /// Wraps an I/O error with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NexusError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NexusError>;
