//! Error types for documentation generation.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that stop a generation run.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Output document could not be created
    #[error("Cannot open output file {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output stream failed
    #[error("Failed to write output: {0}")]
    OutputWrite(#[from] std::io::Error),

    /// Explicitly requested config file could not be loaded
    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

/// Per-file failures recovered by substituting a placeholder.
#[derive(Debug, Error)]
pub enum SourceError {
    /// File could not be read as UTF-8 text
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Notebook could not be read or did not have the expected structure
    #[error("Failed to parse notebook {path}: {message}")]
    Notebook { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, DocsError>;
