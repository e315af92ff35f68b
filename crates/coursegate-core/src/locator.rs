//! Course locators
//!
//! A locator is the already-resolved position of a course: which section it
//! lives in, its place in the foundation sequence, and its canonical id.
//! Raw slugs are resolved to locators by the catalog, never here.

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical course identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Create a new course identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-level content tier.
///
/// Codes other than `s1`/`s2`/`s3` are kept as [`SectionId::Unrecognized`]
/// so the evaluator can deny them instead of guessing a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionId {
    /// `s1`: sequential foundation courses.
    Foundation,
    /// `s2`: premium-only advanced courses.
    Advanced,
    /// `s3`: individually purchased masterclasses.
    Masterclass,
    /// Any other code.
    Unrecognized(String),
}

impl SectionId {
    /// Parse a section code without failing.
    pub fn parse_lossy(raw: &str) -> SectionId {
        raw.parse()
            .unwrap_or_else(|_| SectionId::Unrecognized(raw.to_string()))
    }

    /// Section code (`s1`, `s2`, `s3` or the unrecognized raw code).
    pub fn code(&self) -> &str {
        match self {
            SectionId::Foundation => "s1",
            SectionId::Advanced => "s2",
            SectionId::Masterclass => "s3",
            SectionId::Unrecognized(raw) => raw,
        }
    }

    /// True for `s1`, `s2` and `s3`.
    pub fn is_known(&self) -> bool {
        !matches!(self, SectionId::Unrecognized(_))
    }
}

impl FromStr for SectionId {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s1" => Ok(SectionId::Foundation),
            "s2" => Ok(SectionId::Advanced),
            "s3" => Ok(SectionId::Masterclass),
            _ => Err(CoreError::unknown_section(s)),
        }
    }
}

impl From<String> for SectionId {
    fn from(raw: String) -> Self {
        SectionId::parse_lossy(&raw)
    }
}

impl From<SectionId> for String {
    fn from(section: SectionId) -> Self {
        section.code().to_string()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 1-based position of a course in the foundation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CourseIndex {
    /// Course 1, the entry point.
    First,
    /// Course 2.
    Second,
    /// Course 3.
    Third,
}

impl CourseIndex {
    /// Numeric 1-based position.
    pub fn get(self) -> u32 {
        match self {
            CourseIndex::First => 1,
            CourseIndex::Second => 2,
            CourseIndex::Third => 3,
        }
    }
}

impl TryFrom<u32> for CourseIndex {
    type Error = CoreError;

    fn try_from(value: u32) -> CoreResult<Self> {
        match value {
            1 => Ok(CourseIndex::First),
            2 => Ok(CourseIndex::Second),
            3 => Ok(CourseIndex::Third),
            other => Err(CoreError::CourseIndexOutOfRange(other)),
        }
    }
}

impl From<CourseIndex> for u32 {
    fn from(index: CourseIndex) -> Self {
        index.get()
    }
}

impl fmt::Display for CourseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Resolved position of a course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseLocator {
    /// Canonical course id (used for masterclass purchase checks).
    pub course_id: CourseId,
    /// Section the course lives in.
    pub section: SectionId,
    /// Position in the foundation sequence; `None` outside section 1.
    pub course_index: Option<CourseIndex>,
}

impl CourseLocator {
    /// Create a locator.
    pub fn new(
        course_id: impl Into<CourseId>,
        section: SectionId,
        course_index: Option<CourseIndex>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            section,
            course_index,
        }
    }

    /// Locator for a foundation course.
    pub fn foundation(course_id: impl Into<CourseId>, index: CourseIndex) -> Self {
        Self::new(course_id, SectionId::Foundation, Some(index))
    }

    /// Locator for an advanced course.
    pub fn advanced(course_id: impl Into<CourseId>) -> Self {
        Self::new(course_id, SectionId::Advanced, None)
    }

    /// Locator for a masterclass.
    pub fn masterclass(course_id: impl Into<CourseId>) -> Self {
        Self::new(course_id, SectionId::Masterclass, None)
    }
}

/// Lesson position plus the caller-owned completion count for its course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonProgress {
    /// 1-based lesson index. Zero is never unlocked.
    pub index: u32,
    /// Lessons already completed in this course.
    pub prior_completed: u32,
}

impl LessonProgress {
    /// Create a lesson progress value.
    pub fn new(index: u32, prior_completed: u32) -> Self {
        Self {
            index,
            prior_completed,
        }
    }

    /// Sequential rule: lesson `n` is reachable once `n - 1` are complete.
    pub fn within_sequence(self) -> bool {
        self.index >= 1 && self.index <= self.prior_completed.saturating_add(1)
    }
}
