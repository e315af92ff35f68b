//! Flag mutations
//!
//! The writes course-completion, upsell and checkout code perform. One-way
//! flags only flip back through `Reset`.

use crate::{FlagsRepository, FlagsResult};
use coursegate_core::{CourseId, Role, UserFlags};
use serde::{Deserialize, Serialize};

/// A single change to a user's flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FlagsMutation {
    /// Role changed by billing.
    SetRole {
        /// New role
        role: Role,
    },
    /// User declined the upsell path.
    PressNotReady,
    /// User finished the blueprint course.
    CompleteBlueprint,
    /// User bought a masterclass.
    RecordPurchase {
        /// Purchased course
        course_id: CourseId,
    },
    /// Account reset: clears progression and purchases, keeps the role.
    Reset,
}

/// Apply a mutation to a snapshot.
pub fn apply_mutation(flags: &UserFlags, mutation: &FlagsMutation) -> UserFlags {
    let mut next = flags.clone();
    match mutation {
        FlagsMutation::SetRole { role } => next.role = *role,
        FlagsMutation::PressNotReady => next.pressed_not_ready = true,
        FlagsMutation::CompleteBlueprint => next.blueprint_done = true,
        FlagsMutation::RecordPurchase { course_id } => {
            next.purchased_masterclasses.insert(course_id.clone());
        }
        FlagsMutation::Reset => next = UserFlags::new(flags.role),
    }
    next
}

/// Load, apply and save. Returns the flags as the repository reports them
/// after the save, so overlays that drop fields are reflected.
pub fn update<R: FlagsRepository + ?Sized>(
    repo: &R,
    mutation: &FlagsMutation,
) -> FlagsResult<UserFlags> {
    let current = repo.load()?;
    let next = apply_mutation(&current, mutation);
    let changed = next != current;
    tracing::debug!(?mutation, changed, "applied flag mutation");
    if !changed {
        return Ok(current);
    }
    repo.save(&next)?;
    repo.load()
}
