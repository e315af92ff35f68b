//! Flag storage error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or saving user flags.
///
/// Malformed flag *values* never produce an error; they decode to the
/// least-privileged value. Only the storage itself can fail.
#[derive(Debug, Error)]
pub enum FlagsError {
    /// Backing file could not be read or written.
    #[error("flag store {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Backing file is not a JSON object of strings.
    #[error("flag store {path} is corrupt: {source}")]
    Corrupt {
        /// File that failed
        path: PathBuf,
        /// Parse failure
        #[source]
        source: serde_json::Error,
    },

    /// Flags could not be encoded.
    #[error("failed to encode flags: {0}")]
    Encode(#[from] serde_json::Error),
}

impl FlagsError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a corrupt-store error for the given path.
    pub fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for flag storage operations.
pub type FlagsResult<T> = std::result::Result<T, FlagsError>;
