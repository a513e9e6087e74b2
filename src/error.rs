//! Error types for reading and writing graphs.

use std::path::PathBuf;

use thiserror::Error;

use crate::io::FileFormat;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur while constructing a graph from a serialized description.
///
/// The algorithms themselves cannot fail on a well-formed graph; their preconditions
/// (e.g. connectivity before asking for a spanning tree) are the caller's responsibility.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The serialized source could not be opened because it does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other IO error while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The token stream ended prematurely or contained invalid values.
    #[error("Malformed input: {0}")]
    Malformed(String),

    #[error("Unknown file format {0:?}")]
    UnknownFormat(String),

    /// The format can only be written.
    #[error("{0:?} graphs cannot be read")]
    NotReadable(FileFormat),
}

impl GraphError {
    /// Returns *true* if the error is a [`GraphError::Malformed`]
    pub fn is_malformed(&self) -> bool {
        matches!(self, GraphError::Malformed(_))
    }

    /// Returns *true* if the error is a [`GraphError::FileNotFound`]
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, GraphError::FileNotFound { .. })
    }
}
