//! # Coursegate Catalog - Layer 2: Course Mapping
//!
//! Configuration table resolving free-text course identifiers, including
//! aliases, to `CourseLocator`s. Unknown identifiers resolve to `None`;
//! callers must treat that as "deny", never as a section-1 default.
//!
//! The table is either the built-in default or a TOML file of `[[course]]`
//! entries. File loading is strict and rejects conflicting slugs or
//! sequence positions.

#![forbid(unsafe_code)]

pub mod builtin;
pub mod catalog;
pub mod entry;
pub mod error;

pub use catalog::CourseCatalog;
pub use entry::{normalize_slug, CatalogEntry};
pub use error::{CatalogError, CatalogResult};
