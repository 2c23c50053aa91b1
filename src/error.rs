//! Error types for lstree
//!
//! Every walk failure carries the path it happened at.

use std::io;
use std::path::PathBuf;

/// Error type for tree walks
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Root path does not exist
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A directory's contents could not be listed
    #[error("Cannot read directory {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output stream failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience Result type using TreeError
pub type Result<T> = std::result::Result<T, TreeError>;

impl TreeError {
    /// Create a Read error for `path`
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Whether the root argument itself was unusable (missing or not a directory)
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NotADirectory(_))
    }

    /// Whether this is an output write into a closed pipe
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
