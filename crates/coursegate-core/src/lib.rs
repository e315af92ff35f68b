//! # Coursegate Core - Layer 1: Gate Vocabulary
//!
//! Leaf types consumed by the policy evaluator and its callers:
//!
//! - `Role` and the premium / trial-like partition
//! - `UserFlags`, the only mutable input to the evaluator
//! - `CourseLocator`, `SectionId`, `CourseIndex`, `CourseId`
//! - `AccessDecision`, the four-valued evaluator output
//!
//! Nothing in this crate performs I/O. Parsing entry points that take raw
//! strings are lossy and fail closed (unknown role becomes `Role::Free`,
//! unknown section becomes `SectionId::Unrecognized`), with strict variants
//! returning `CoreError` for configuration loaders.

#![forbid(unsafe_code)]

pub mod decision;
pub mod errors;
pub mod flags;
pub mod locator;
pub mod role;

pub use decision::AccessDecision;
pub use errors::{CoreError, CoreResult};
pub use flags::UserFlags;
pub use locator::{CourseId, CourseIndex, CourseLocator, LessonProgress, SectionId};
pub use role::{is_premium, is_trial_like, Role};
