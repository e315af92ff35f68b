//! Catalog error types
//!
//! Loading a catalog is strict. Resolution against a loaded catalog never
//! fails; unknown slugs simply resolve to `None`.

use coursegate_core::{CoreError, CourseIndex};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from building or loading a course catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid TOML for the catalog schema.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Course id or alias is blank.
    #[error("course slug must not be empty")]
    EmptySlug,

    /// Section code is not a known section.
    #[error("course {id}: {source}")]
    InvalidSection {
        /// Course being loaded
        id: String,
        /// Parse failure
        #[source]
        source: CoreError,
    },

    /// Foundation course index out of range.
    #[error("course {id}: {source}")]
    InvalidIndex {
        /// Course being loaded
        id: String,
        /// Parse failure
        #[source]
        source: CoreError,
    },

    /// Foundation course without a sequence index.
    #[error("foundation course {id} needs an index")]
    MissingIndex {
        /// Course being loaded
        id: String,
    },

    /// Sequence index given outside the foundation section.
    #[error("course {id} is not in s1 and cannot have an index")]
    IndexOutsideFoundation {
        /// Course being loaded
        id: String,
    },

    /// Slug already maps to another course.
    #[error("slug {slug:?} is already used by course {existing}")]
    DuplicateSlug {
        /// Conflicting slug
        slug: String,
        /// Course that already owns it
        existing: String,
    },

    /// Two foundation courses share a sequence position.
    #[error("foundation index {index} is assigned twice")]
    DuplicateIndex {
        /// Conflicting index
        index: CourseIndex,
    },
}

impl CatalogError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a duplicate slug error.
    pub fn duplicate_slug(slug: impl Into<String>, existing: impl Into<String>) -> Self {
        Self::DuplicateSlug {
            slug: slug.into(),
            existing: existing.into(),
        }
    }
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
