//! Core error types
//!
//! Only the strict parsers return these. The lossy parsers used on the
//! evaluation path never fail.

use thiserror::Error;

/// Errors from strict parsing of gate vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Role string is not one of the known roles.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),

    /// Section code is not `s1`, `s2` or `s3`.
    #[error("unknown section: {0:?}")]
    UnknownSection(String),

    /// Course index outside the 1..=3 sequence.
    #[error("course index {0} is out of range (expected 1..=3)")]
    CourseIndexOutOfRange(u32),
}

impl CoreError {
    /// Create an unknown role error.
    pub fn unknown_role(raw: impl Into<String>) -> Self {
        Self::UnknownRole(raw.into())
    }

    /// Create an unknown section error.
    pub fn unknown_section(raw: impl Into<String>) -> Self {
        Self::UnknownSection(raw.into())
    }
}

/// Result alias for strict core parsing.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
