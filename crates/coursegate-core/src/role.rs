//! Membership roles
//!
//! Roles fall into two partitions: premium roles see all of the foundation
//! and advanced sections, trial-like roles are subject to progression gating.
//! Every role belongs to exactly one partition.

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Membership role of a user.
///
/// Deserialization is lossy: any unrecognized string becomes [`Role::Free`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    /// No membership.
    #[default]
    Free,
    /// Time-limited trial membership.
    Trial,
    /// Monthly subscription.
    Monthly,
    /// Annual subscription.
    Annual,
    /// Reduced offer taken after declining the full membership.
    Downsell,
    /// Staff account.
    Admin,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 6] = [
        Role::Free,
        Role::Trial,
        Role::Monthly,
        Role::Annual,
        Role::Downsell,
        Role::Admin,
    ];

    /// Stable string code used in persisted flags.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Free => "free",
            Role::Trial => "trial",
            Role::Monthly => "monthly",
            Role::Annual => "annual",
            Role::Downsell => "downsell",
            Role::Admin => "admin",
        }
    }

    /// Premium roles have unrestricted access to sections 1 and 2.
    pub fn is_premium(self) -> bool {
        matches!(self, Role::Monthly | Role::Annual | Role::Admin)
    }

    /// Trial-like roles are subject to progression gating.
    pub fn is_trial_like(self) -> bool {
        matches!(self, Role::Free | Role::Trial | Role::Downsell)
    }

    /// Parse a stored role string, falling back to [`Role::Free`].
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn normalize(raw: &str) -> Role {
        match raw.parse() {
            Ok(role) => role,
            Err(_) => {
                tracing::warn!(raw, "unrecognized role, treating as free");
                Role::Free
            }
        }
    }
}

/// Free-function form of [`Role::is_premium`].
pub fn is_premium(role: Role) -> bool {
    role.is_premium()
}

/// Free-function form of [`Role::is_trial_like`].
pub fn is_trial_like(role: Role) -> bool {
    role.is_trial_like()
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let code = s.trim().to_ascii_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == code)
            .ok_or_else(|| CoreError::unknown_role(s))
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::normalize(&raw)
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Role::normalize(raw)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
