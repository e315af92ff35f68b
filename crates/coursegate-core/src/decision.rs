//! Access decisions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of gating a course or lesson.
///
/// Exactly one value applies to any `(flags, locator)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessDecision {
    /// Content is available.
    Unlocked,
    /// A premium role is required.
    LockedUpgrade,
    /// Earlier content must be completed first.
    LockedProgress,
    /// The masterclass must be bought individually.
    LockedPurchase,
}

impl AccessDecision {
    /// Every decision value.
    pub const ALL: [AccessDecision; 4] = [
        AccessDecision::Unlocked,
        AccessDecision::LockedUpgrade,
        AccessDecision::LockedProgress,
        AccessDecision::LockedPurchase,
    ];

    /// Kebab-case code (`locked-upgrade`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            AccessDecision::Unlocked => "unlocked",
            AccessDecision::LockedUpgrade => "locked-upgrade",
            AccessDecision::LockedProgress => "locked-progress",
            AccessDecision::LockedPurchase => "locked-purchase",
        }
    }

    /// True for `Unlocked`.
    pub fn is_unlocked(self) -> bool {
        matches!(self, AccessDecision::Unlocked)
    }

    /// True for every locked variant.
    pub fn is_locked(self) -> bool {
        !self.is_unlocked()
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_serde() {
        for decision in AccessDecision::ALL {
            let json = serde_json::to_string(&decision).unwrap();
            assert_eq!(json, format!("\"{}\"", decision.as_str()));
        }
    }

    #[test]
    fn only_unlocked_is_unlocked() {
        let unlocked: Vec<_> = AccessDecision::ALL
            .into_iter()
            .filter(|d| d.is_unlocked())
            .collect();
        assert_eq!(unlocked, vec![AccessDecision::Unlocked]);
    }
}
