//! User flags
//!
//! `UserFlags` is rebuilt by the caller on every evaluation from whatever
//! store it uses. The evaluator only reads it.

use crate::{CourseId, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Role and progression flags of a single user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFlags {
    /// Membership role.
    pub role: Role,
    /// Set once the user declines the upsell path. One-way.
    #[serde(default)]
    pub pressed_not_ready: bool,
    /// Set once the first foundation course is complete.
    #[serde(default)]
    pub blueprint_done: bool,
    /// Masterclasses bought individually.
    #[serde(default)]
    pub purchased_masterclasses: BTreeSet<CourseId>,
}

impl UserFlags {
    /// Flags for a user with the given role and no progression.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    /// Builder: mark the not-ready path as taken.
    pub fn with_pressed_not_ready(mut self) -> Self {
        self.pressed_not_ready = true;
        self
    }

    /// Builder: mark the blueprint course as complete.
    pub fn with_blueprint_done(mut self) -> Self {
        self.blueprint_done = true;
        self
    }

    /// Builder: add a purchased masterclass.
    pub fn with_purchase(mut self, course_id: impl Into<CourseId>) -> Self {
        self.purchased_masterclasses.insert(course_id.into());
        self
    }

    /// Whether the given masterclass has been bought.
    pub fn has_purchased(&self, course_id: &CourseId) -> bool {
        self.purchased_masterclasses.contains(course_id)
    }

    /// Merge a newer snapshot into this one.
    ///
    /// Booleans and purchases only ever grow, so they are OR-ed and unioned.
    /// The role is taken from `newer`.
    pub fn join(&self, newer: &UserFlags) -> UserFlags {
        UserFlags {
            role: newer.role,
            pressed_not_ready: self.pressed_not_ready || newer.pressed_not_ready,
            blueprint_done: self.blueprint_done || newer.blueprint_done,
            purchased_masterclasses: self
                .purchased_masterclasses
                .union(&newer.purchased_masterclasses)
                .cloned()
                .collect(),
        }
    }
}
