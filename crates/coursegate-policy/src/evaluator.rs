//! Access Policy Evaluator
//!
//! Pure functions deciding whether a course can be started, whether a lesson
//! inside it is open, and which lock applies otherwise.
//!
//! # Rules
//!
//! ```text
//! s1 foundation   premium: everything open
//!                 course 1: always startable
//!                 course 2: startable after the blueprint or "not ready yet"
//!                 course 3: upgrade required
//!                 lessons:  sequential; "not ready yet" alone opens lesson 1 only
//! s2 advanced     premium only
//! s3 masterclass  per-item purchase, for every role
//! other           denied
//! ```
//!
//! # Lock precedence
//!
//! [`course_lock_state`] and [`lesson_lock_state`] both go through one
//! resolution step, which checks in this order:
//!
//! ```text
//! LockedPurchase → LockedUpgrade → LockedProgress → Unlocked
//! ```
//!
//! No function here panics or returns an error. Anything that cannot be
//! classified resolves to a locked state.

use coursegate_core::{
    AccessDecision, CourseIndex, CourseLocator, LessonProgress, SectionId, UserFlags,
};

/// Whether the course can be entered at all.
pub fn can_start_course(flags: &UserFlags, locator: &CourseLocator) -> bool {
    match &locator.section {
        SectionId::Foundation => {
            if flags.role.is_premium() {
                return true;
            }
            match locator.course_index {
                Some(CourseIndex::First) => true,
                Some(CourseIndex::Second) => flags.blueprint_done || flags.pressed_not_ready,
                Some(CourseIndex::Third) | None => false,
            }
        }
        SectionId::Advanced => flags.role.is_premium(),
        SectionId::Masterclass => flags.has_purchased(&locator.course_id),
        SectionId::Unrecognized(_) => false,
    }
}

/// Whether a specific lesson of the course is open.
///
/// `lesson.prior_completed` is the caller's count of completed lessons in
/// this course. Lesson index 0 is never open.
pub fn is_lesson_unlocked(
    flags: &UserFlags,
    locator: &CourseLocator,
    lesson: LessonProgress,
) -> bool {
    if lesson.index == 0 || !can_start_course(flags, locator) {
        return false;
    }

    match &locator.section {
        SectionId::Foundation => {
            if flags.role.is_premium() {
                return true;
            }
            match locator.course_index {
                Some(CourseIndex::First) => lesson.within_sequence(),
                // Startable here means blueprint_done or pressed_not_ready.
                Some(CourseIndex::Second) if flags.blueprint_done => lesson.within_sequence(),
                Some(CourseIndex::Second) => lesson.index == 1,
                Some(CourseIndex::Third) | None => false,
            }
        }
        SectionId::Advanced | SectionId::Masterclass => true,
        SectionId::Unrecognized(_) => false,
    }
}

/// Whether an upgrade prompt must replace the content.
///
/// Masterclasses never show the upgrade prompt; they show a purchase prompt.
pub fn requires_upgrade_cta(flags: &UserFlags, locator: &CourseLocator) -> bool {
    match &locator.section {
        SectionId::Foundation => {
            !flags.role.is_premium()
                && !matches!(
                    locator.course_index,
                    Some(CourseIndex::First | CourseIndex::Second)
                )
        }
        SectionId::Advanced => !flags.role.is_premium(),
        SectionId::Masterclass => false,
        SectionId::Unrecognized(_) => true,
    }
}

/// Course-level lock state.
pub fn course_lock_state(flags: &UserFlags, locator: &CourseLocator) -> AccessDecision {
    resolve(flags, locator, None)
}

/// Lesson-level lock state. A course-level lock always wins.
pub fn lesson_lock_state(
    flags: &UserFlags,
    locator: &CourseLocator,
    lesson: LessonProgress,
) -> AccessDecision {
    resolve(flags, locator, Some(lesson))
}

fn resolve(
    flags: &UserFlags,
    locator: &CourseLocator,
    lesson: Option<LessonProgress>,
) -> AccessDecision {
    let decision = if locator.section == SectionId::Masterclass
        && !flags.has_purchased(&locator.course_id)
    {
        AccessDecision::LockedPurchase
    } else if requires_upgrade_cta(flags, locator) {
        AccessDecision::LockedUpgrade
    } else if !can_start_course(flags, locator)
        || lesson.is_some_and(|lesson| !is_lesson_unlocked(flags, locator, lesson))
    {
        AccessDecision::LockedProgress
    } else {
        AccessDecision::Unlocked
    };

    tracing::debug!(
        role = %flags.role,
        section = %locator.section,
        course = %locator.course_id,
        lesson = lesson.map(|l| l.index),
        %decision,
        "resolved access"
    );

    decision
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegate_core::Role;

    fn s1(index: CourseIndex) -> CourseLocator {
        CourseLocator::foundation(format!("s1-{index}"), index)
    }

    #[test]
    fn trial_scenario() {
        let flags = UserFlags::new(Role::Trial);
        let second = s1(CourseIndex::Second);

        assert!(!can_start_course(&flags, &second));
        assert_eq!(
            course_lock_state(&flags, &second),
            AccessDecision::LockedProgress
        );

        let flags = flags.with_pressed_not_ready();
        assert!(can_start_course(&flags, &second));
        assert!(is_lesson_unlocked(&flags, &second, LessonProgress::new(1, 0)));
        assert!(!is_lesson_unlocked(&flags, &second, LessonProgress::new(2, 0)));
        assert_eq!(course_lock_state(&flags, &second), AccessDecision::Unlocked);
    }

    #[test]
    fn blueprint_opens_course_two_sequentially() {
        let flags = UserFlags::new(Role::Free).with_blueprint_done();
        let second = s1(CourseIndex::Second);
        assert!(is_lesson_unlocked(&flags, &second, LessonProgress::new(3, 2)));
        assert!(!is_lesson_unlocked(&flags, &second, LessonProgress::new(4, 2)));
    }

    #[test]
    fn course_one_is_entry_point() {
        for role in [Role::Free, Role::Trial, Role::Downsell] {
            let flags = UserFlags::new(role);
            let first = s1(CourseIndex::First);
            assert!(can_start_course(&flags, &first));
            assert!(!requires_upgrade_cta(&flags, &first));
            assert_eq!(course_lock_state(&flags, &first), AccessDecision::Unlocked);
        }
    }

    #[test]
    fn course_three_needs_upgrade() {
        let flags = UserFlags::new(Role::Trial)
            .with_blueprint_done()
            .with_pressed_not_ready();
        let third = s1(CourseIndex::Third);
        assert!(!can_start_course(&flags, &third));
        assert!(requires_upgrade_cta(&flags, &third));
        assert_eq!(
            course_lock_state(&flags, &third),
            AccessDecision::LockedUpgrade
        );
    }

    #[test]
    fn advanced_is_premium_only() {
        let course = CourseLocator::advanced("advanced-funnels");
        let trial = UserFlags::new(Role::Trial);
        let annual = UserFlags::new(Role::Annual);

        assert!(!can_start_course(&trial, &course));
        assert!(requires_upgrade_cta(&trial, &course));
        assert_eq!(
            course_lock_state(&trial, &course),
            AccessDecision::LockedUpgrade
        );

        assert!(can_start_course(&annual, &course));
        assert!(is_lesson_unlocked(&annual, &course, LessonProgress::new(9, 0)));
        assert_eq!(course_lock_state(&annual, &course), AccessDecision::Unlocked);
    }

    #[test]
    fn admin_still_needs_masterclass_purchase() {
        let course = CourseLocator::masterclass("mc");
        let admin = UserFlags::new(Role::Admin);
        assert!(!can_start_course(&admin, &course));
        assert!(!is_lesson_unlocked(&admin, &course, LessonProgress::new(1, 0)));
        assert!(!requires_upgrade_cta(&admin, &course));
        assert_eq!(
            course_lock_state(&admin, &course),
            AccessDecision::LockedPurchase
        );

        let admin = admin.with_purchase("mc");
        assert_eq!(course_lock_state(&admin, &course), AccessDecision::Unlocked);
    }

    #[test]
    fn purchase_beats_upgrade() {
        let course = CourseLocator::masterclass("mc");
        let free = UserFlags::new(Role::Free);
        assert_eq!(
            course_lock_state(&free, &course),
            AccessDecision::LockedPurchase
        );
    }

    #[test]
    fn unknown_section_fails_closed() {
        let course = CourseLocator::new("x", SectionId::parse_lossy("s4"), None);
        let admin = UserFlags::new(Role::Admin).with_purchase("x");
        assert!(!can_start_course(&admin, &course));
        assert!(!is_lesson_unlocked(&admin, &course, LessonProgress::new(1, 0)));
        assert!(requires_upgrade_cta(&admin, &course));
        assert_eq!(
            course_lock_state(&admin, &course),
            AccessDecision::LockedUpgrade
        );
    }

    #[test]
    fn foundation_without_index_denies_non_premium() {
        let course = CourseLocator::new("x", SectionId::Foundation, None);
        let trial = UserFlags::new(Role::Trial).with_blueprint_done();
        assert_eq!(
            course_lock_state(&trial, &course),
            AccessDecision::LockedUpgrade
        );
        let monthly = UserFlags::new(Role::Monthly);
        assert_eq!(course_lock_state(&monthly, &course), AccessDecision::Unlocked);
    }

    #[test]
    fn lesson_zero_is_never_open() {
        let flags = UserFlags::new(Role::Admin);
        let first = s1(CourseIndex::First);
        assert!(!is_lesson_unlocked(&flags, &first, LessonProgress::new(0, 10)));
        assert_eq!(
            lesson_lock_state(&flags, &first, LessonProgress::new(0, 10)),
            AccessDecision::LockedProgress
        );
    }

    #[test]
    fn lesson_lock_defers_to_course_lock() {
        let flags = UserFlags::new(Role::Trial);
        let third = s1(CourseIndex::Third);
        assert_eq!(
            lesson_lock_state(&flags, &third, LessonProgress::new(5, 0)),
            AccessDecision::LockedUpgrade
        );

        let first = s1(CourseIndex::First);
        assert_eq!(
            lesson_lock_state(&flags, &first, LessonProgress::new(3, 1)),
            AccessDecision::LockedProgress
        );
        assert_eq!(
            lesson_lock_state(&flags, &first, LessonProgress::new(2, 1)),
            AccessDecision::Unlocked
        );
    }
}
