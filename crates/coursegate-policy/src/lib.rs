//! # Coursegate Policy - Layer 3: Access Policy Evaluation
//!
//! The one evaluator for content gating. Given `UserFlags` and a resolved
//! `CourseLocator` it answers:
//!
//! - `can_start_course`: can the course be entered at all
//! - `is_lesson_unlocked`: is a given lesson open
//! - `requires_upgrade_cta`: must an upgrade prompt replace the content
//! - `course_lock_state` / `lesson_lock_state`: which `AccessDecision` applies
//!
//! Presentation text lives in `messages` as a lookup over the decision and
//! role. `PolicyEvaluator` bundles a catalog for callers holding raw slugs.
//!
//! Every function is pure, synchronous and total. Unknown input resolves to
//! a locked state.
//!
//! # Usage
//!
//! ```rust
//! use coursegate_core::{AccessDecision, CourseIndex, CourseLocator, Role, UserFlags};
//! use coursegate_policy::course_lock_state;
//!
//! let flags = UserFlags::new(Role::Trial);
//! let course = CourseLocator::foundation("first-sale-sprint", CourseIndex::Second);
//! assert_eq!(course_lock_state(&flags, &course), AccessDecision::LockedProgress);
//! ```

#![forbid(unsafe_code)]

pub mod evaluator;
pub mod gate;
pub mod messages;

pub use evaluator::{
    can_start_course, course_lock_state, is_lesson_unlocked, lesson_lock_state,
    requires_upgrade_cta,
};
pub use gate::{gate_course, gate_lesson, CourseGate, PolicyEvaluator};
pub use messages::{cta_for, lock_message, Cta, CtaAction, UNKNOWN_COURSE_MESSAGE};
