//! Catalog entries and their on-disk form

use crate::{CatalogError, CatalogResult};
use coursegate_core::{CourseId, CourseIndex, CourseLocator, SectionId};
use serde::{Deserialize, Serialize};

/// Normalize a slug for lookup: trimmed, ASCII lowercase.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// One course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Canonical id.
    pub id: CourseId,
    /// Display title.
    pub title: String,
    /// Section the course belongs to.
    pub section: SectionId,
    /// Position in the foundation sequence.
    pub course_index: Option<CourseIndex>,
    /// Alternate slugs that resolve to this course.
    pub aliases: Vec<String>,
    /// Number of lessons, informational.
    pub lessons: u32,
}

impl CatalogEntry {
    /// Resolved locator for this course.
    pub fn locator(&self) -> CourseLocator {
        CourseLocator::new(self.id.clone(), self.section.clone(), self.course_index)
    }

    /// Canonical id followed by every alias, normalized.
    pub fn slugs(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.id.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .map(normalize_slug)
    }
}

/// `[[course]]` table as written in a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CourseSpec {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub section: String,
    #[serde(default)]
    pub index: Option<u32>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub lessons: u32,
}

impl CourseSpec {
    /// Validate the raw table into an entry.
    pub fn into_entry(self) -> CatalogResult<CatalogEntry> {
        let id = normalize_slug(&self.id);
        if id.is_empty() {
            return Err(CatalogError::EmptySlug);
        }

        let section: SectionId =
            self.section
                .parse()
                .map_err(|source| CatalogError::InvalidSection {
                    id: id.clone(),
                    source,
                })?;

        let course_index = match (&section, self.index) {
            (SectionId::Foundation, Some(raw)) => Some(CourseIndex::try_from(raw).map_err(
                |source| CatalogError::InvalidIndex {
                    id: id.clone(),
                    source,
                },
            )?),
            (SectionId::Foundation, None) => {
                return Err(CatalogError::MissingIndex { id });
            }
            (_, Some(_)) => return Err(CatalogError::IndexOutsideFoundation { id }),
            (_, None) => None,
        };

        Ok(CatalogEntry {
            title: self.title.unwrap_or_else(|| id.clone()),
            id: CourseId::new(id),
            section,
            course_index,
            aliases: self.aliases,
            lessons: self.lessons,
        })
    }
}
