//! Gating status
//!
//! Combines a decision with its banner text and call-to-action so page code
//! receives one value. The text is always derived from the decision.

use crate::evaluator::{course_lock_state, lesson_lock_state};
use crate::messages::{cta_for, lock_message, Cta, UNKNOWN_COURSE_MESSAGE};
use coursegate_catalog::{CatalogEntry, CourseCatalog};
use coursegate_core::{
    AccessDecision, CourseLocator, LessonProgress, Role, SectionId, UserFlags,
};
use serde::Serialize;

/// Decision plus presentation text for one course or lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseGate {
    /// The resolved decision.
    pub decision: AccessDecision,
    /// Banner text, empty when unlocked.
    pub message: &'static str,
    /// Button, absent when unlocked.
    pub cta: Option<Cta>,
}

impl CourseGate {
    /// Attach wording for `role` to a decision.
    pub fn from_decision(decision: AccessDecision, role: Role) -> Self {
        Self {
            decision,
            message: lock_message(decision, role),
            cta: cta_for(decision, role),
        }
    }

    /// Gate for a slug the catalog does not know.
    pub fn unknown_course(role: Role) -> Self {
        Self {
            message: UNKNOWN_COURSE_MESSAGE,
            ..Self::from_decision(AccessDecision::LockedUpgrade, role)
        }
    }

    /// True when the content is available.
    pub fn is_unlocked(&self) -> bool {
        self.decision.is_unlocked()
    }
}

/// Gate a resolved course.
pub fn gate_course(flags: &UserFlags, locator: &CourseLocator) -> CourseGate {
    CourseGate::from_decision(course_lock_state(flags, locator), flags.role)
}

/// Gate a lesson of a resolved course.
pub fn gate_lesson(
    flags: &UserFlags,
    locator: &CourseLocator,
    lesson: LessonProgress,
) -> CourseGate {
    CourseGate::from_decision(lesson_lock_state(flags, locator, lesson), flags.role)
}

/// Evaluator bound to a course catalog, for callers holding raw slugs.
#[derive(Debug, Clone)]
pub struct PolicyEvaluator {
    catalog: CourseCatalog,
}

impl PolicyEvaluator {
    /// Create an evaluator over the given catalog.
    pub fn new(catalog: CourseCatalog) -> Self {
        Self { catalog }
    }

    /// Create an evaluator over the built-in catalog.
    pub fn with_builtin_catalog() -> Self {
        Self::new(CourseCatalog::builtin())
    }

    /// The catalog in use.
    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Rewrite purchases recorded under an alias to their canonical id.
    ///
    /// Purchases the catalog does not know are kept as recorded.
    pub fn canonical_flags(&self, flags: &UserFlags) -> UserFlags {
        let purchased_masterclasses = flags
            .purchased_masterclasses
            .iter()
            .map(|id| {
                self.catalog
                    .canonical_id(id.as_str())
                    .cloned()
                    .unwrap_or_else(|| id.clone())
            })
            .collect();
        UserFlags {
            purchased_masterclasses,
            ..flags.clone()
        }
    }

    /// Gate a course by slug. Unknown slugs are denied.
    pub fn evaluate_course(&self, flags: &UserFlags, slug: &str) -> CourseGate {
        match self.catalog.resolve(slug) {
            Some(locator) => gate_course(&self.canonical_flags(flags), &locator),
            None => CourseGate::unknown_course(flags.role),
        }
    }

    /// Gate a lesson by course slug. Unknown slugs are denied.
    pub fn evaluate_lesson(
        &self,
        flags: &UserFlags,
        slug: &str,
        lesson: LessonProgress,
    ) -> CourseGate {
        match self.catalog.resolve(slug) {
            Some(locator) => gate_lesson(&self.canonical_flags(flags), &locator, lesson),
            None => CourseGate::unknown_course(flags.role),
        }
    }

    /// Gate every course of a section, in catalog order.
    pub fn section_overview<'a>(
        &'a self,
        flags: &UserFlags,
        section: &'a SectionId,
    ) -> Vec<(&'a CatalogEntry, CourseGate)> {
        let flags = self.canonical_flags(flags);
        self.catalog
            .section(section)
            .map(|entry| (entry, gate_course(&flags, &entry.locator())))
            .collect()
    }
}

impl Default for PolicyEvaluator {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::CtaAction;
    use coursegate_core::CourseId;

    #[test]
    fn unknown_slug_is_denied() {
        let evaluator = PolicyEvaluator::default();
        let gate = evaluator.evaluate_course(&UserFlags::new(Role::Admin), "bonus-course");
        assert_eq!(gate.decision, AccessDecision::LockedUpgrade);
        assert_eq!(gate.message, UNKNOWN_COURSE_MESSAGE);
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn alias_purchase_counts() {
        let evaluator = PolicyEvaluator::default();
        let flags = UserFlags::new(Role::Trial).with_purchase("short-form-video");
        let gate = evaluator.evaluate_course(&flags, "masterclass-short-form-video");
        assert!(gate.is_unlocked());
        assert_eq!(gate.cta, None);

        let canonical = evaluator.canonical_flags(&flags);
        assert!(canonical.has_purchased(&CourseId::new("masterclass-short-form-video")));
    }

    #[test]
    fn lesson_gate_by_slug() {
        let evaluator = PolicyEvaluator::default();
        let flags = UserFlags::new(Role::Trial).with_pressed_not_ready();
        let open = evaluator.evaluate_lesson(&flags, "first-sale-sprint", LessonProgress::new(1, 0));
        let closed =
            evaluator.evaluate_lesson(&flags, "first-sale-sprint", LessonProgress::new(2, 1));
        assert!(open.is_unlocked());
        assert_eq!(closed.decision, AccessDecision::LockedProgress);
        assert_eq!(
            closed.cta.map(|c| c.action),
            Some(CtaAction::ContinueCourse)
        );
    }

    #[test]
    fn gate_json_shape() {
        let gate = CourseGate::from_decision(AccessDecision::LockedPurchase, Role::Trial);
        let value = serde_json::to_value(gate).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "decision": "locked-purchase",
                "message": "Purchase this masterclass to get access.",
                "cta": { "label": "Buy masterclass", "action": "purchase" },
            })
        );

        let open = serde_json::to_value(CourseGate::from_decision(
            AccessDecision::Unlocked,
            Role::Free,
        ))
        .unwrap();
        assert_eq!(open["message"], "");
        assert!(open["cta"].is_null());
    }

    #[test]
    fn foundation_overview_for_new_trial() {
        let evaluator = PolicyEvaluator::default();
        let overview =
            evaluator.section_overview(&UserFlags::new(Role::Trial), &SectionId::Foundation);
        let decisions: Vec<_> = overview.iter().map(|(_, gate)| gate.decision).collect();
        assert_eq!(
            decisions,
            vec![
                AccessDecision::Unlocked,
                AccessDecision::LockedProgress,
                AccessDecision::LockedUpgrade,
            ]
        );
    }
}
