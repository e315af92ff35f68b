//! Built-in course table
//!
//! Used when no catalog file is configured. The blueprint course is
//! reachable under two slugs.

use crate::CatalogEntry;
use coursegate_core::{CourseId, CourseIndex, SectionId};

fn entry(
    id: &str,
    title: &str,
    section: SectionId,
    course_index: Option<CourseIndex>,
    aliases: &[&str],
    lessons: u32,
) -> CatalogEntry {
    CatalogEntry {
        id: CourseId::new(id),
        title: title.to_string(),
        section,
        course_index,
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        lessons,
    }
}

/// Default course entries.
pub fn builtin_entries() -> Vec<CatalogEntry> {
    use CourseIndex::{First, Second, Third};
    use SectionId::{Advanced, Foundation, Masterclass};

    vec![
        entry(
            "business-blueprint",
            "The Business Blueprint",
            Foundation,
            Some(First),
            &["blueprint"],
            7,
        ),
        entry(
            "first-sale-sprint",
            "First Sale Sprint",
            Foundation,
            Some(Second),
            &[],
            6,
        ),
        entry(
            "traffic-foundations",
            "Traffic Foundations",
            Foundation,
            Some(Third),
            &[],
            8,
        ),
        entry("advanced-funnels", "Advanced Funnels", Advanced, None, &[], 9),
        entry(
            "paid-ads-accelerator",
            "Paid Ads Accelerator",
            Advanced,
            None,
            &["ads-accelerator"],
            10,
        ),
        entry("email-empire", "Email Empire", Advanced, None, &[], 6),
        entry(
            "masterclass-short-form-video",
            "Short-Form Video Masterclass",
            Masterclass,
            None,
            &["short-form-video"],
            5,
        ),
        entry(
            "masterclass-copywriting",
            "Copywriting Masterclass",
            Masterclass,
            None,
            &[],
            5,
        ),
        entry(
            "masterclass-high-ticket",
            "High-Ticket Sales Masterclass",
            Masterclass,
            None,
            &[],
            4,
        ),
    ]
}
