//! Course catalog
//!
//! Maps course slugs (canonical ids and aliases) to locators. The catalog is
//! configuration data: it is built once, then only read, and is safe to share
//! across threads without locking.

use crate::entry::{normalize_slug, CourseSpec};
use crate::{builtin, CatalogEntry, CatalogError, CatalogResult};
use coursegate_core::{CourseId, CourseIndex, CourseLocator, SectionId};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Catalog file layout: a list of `[[course]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "course", default)]
    courses: Vec<CourseSpec>,
}

/// Slug-to-locator table.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    /// Entries in insertion order, keyed by canonical id
    entries: IndexMap<CourseId, CatalogEntry>,
    /// Every normalized slug (ids and aliases) to its canonical id
    slugs: HashMap<String, CourseId>,
}

impl CourseCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in course table.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for entry in builtin::builtin_entries() {
            catalog.insert_unchecked(entry);
        }
        catalog
    }

    /// Build a catalog from entries, rejecting conflicts.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry)?;
        }
        Ok(catalog)
    }

    /// Parse a TOML catalog.
    ///
    /// ```toml
    /// [[course]]
    /// id = "business-blueprint"
    /// section = "s1"
    /// index = 1
    /// aliases = ["blueprint"]
    /// ```
    pub fn from_toml_str(source: &str) -> CatalogResult<Self> {
        let file: CatalogFile = toml::from_str(source)?;
        let entries = file
            .courses
            .into_iter()
            .map(CourseSpec::into_entry)
            .collect::<CatalogResult<Vec<_>>>()?;
        Self::from_entries(entries)
    }

    /// Load a TOML catalog from disk.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let source =
            std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let catalog = Self::from_toml_str(&source)?;
        tracing::info!(
            path = %path.display(),
            courses = catalog.len(),
            "loaded course catalog"
        );
        Ok(catalog)
    }

    /// Add an entry after checking its slugs and sequence position.
    pub fn insert(&mut self, entry: CatalogEntry) -> CatalogResult<()> {
        let mut seen = Vec::new();
        for slug in entry.slugs() {
            if slug.is_empty() {
                return Err(CatalogError::EmptySlug);
            }
            if let Some(existing) = self.slugs.get(&slug) {
                return Err(CatalogError::duplicate_slug(slug, existing.as_str()));
            }
            if seen.contains(&slug) {
                return Err(CatalogError::duplicate_slug(slug, entry.id.as_str()));
            }
            seen.push(slug);
        }

        if let (SectionId::Foundation, Some(index)) = (&entry.section, entry.course_index) {
            if self.foundation(index).is_some() {
                return Err(CatalogError::DuplicateIndex { index });
            }
        }

        self.insert_unchecked(entry);
        Ok(())
    }

    fn insert_unchecked(&mut self, entry: CatalogEntry) {
        for slug in entry.slugs() {
            self.slugs.insert(slug, entry.id.clone());
        }
        self.entries.insert(entry.id.clone(), entry);
    }

    /// Resolve a slug to its locator. Unknown slugs resolve to `None`.
    pub fn resolve(&self, slug: &str) -> Option<CourseLocator> {
        let locator = self.entry(slug).map(CatalogEntry::locator);
        if locator.is_none() {
            tracing::debug!(slug, "no catalog mapping for course slug");
        }
        locator
    }

    /// Canonical id for a slug or alias.
    pub fn canonical_id(&self, slug: &str) -> Option<&CourseId> {
        self.slugs.get(&normalize_slug(slug))
    }

    /// Entry for a slug or alias.
    pub fn entry(&self, slug: &str) -> Option<&CatalogEntry> {
        self.canonical_id(slug).and_then(|id| self.entries.get(id))
    }

    /// Foundation course at the given sequence position.
    pub fn foundation(&self, index: CourseIndex) -> Option<&CatalogEntry> {
        self.entries.values().find(|entry| {
            entry.section == SectionId::Foundation && entry.course_index == Some(index)
        })
    }

    /// Locator of the designated first course (section 1, course 1).
    pub fn blueprint(&self) -> Option<CourseLocator> {
        self.foundation(CourseIndex::First).map(CatalogEntry::locator)
    }

    /// Entries in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Entries of one section in catalog order.
    pub fn section<'a>(
        &'a self,
        section: &'a SectionId,
    ) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries().filter(move |entry| &entry.section == section)
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no courses.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
