//! Lock messages and calls to action
//!
//! Display text keyed by decision and role. There is no policy logic here;
//! the role only changes wording.

use coursegate_core::{AccessDecision, Role};
use serde::Serialize;

/// Shown when a course slug has no catalog mapping.
pub const UNKNOWN_COURSE_MESSAGE: &str = "This course is not available for your account.";

/// What a call-to-action button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CtaAction {
    /// Open the membership upgrade flow.
    Upgrade,
    /// Return to the next open lesson.
    ContinueCourse,
    /// Open the masterclass checkout.
    Purchase,
    /// Route to support.
    ContactSupport,
}

/// Call-to-action shown on a lock banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cta {
    /// Button label.
    pub label: &'static str,
    /// Button behaviour.
    pub action: CtaAction,
}

impl Cta {
    const fn new(label: &'static str, action: CtaAction) -> Self {
        Self { label, action }
    }
}

/// Lock banner text. Empty for `Unlocked`, non-empty otherwise.
pub fn lock_message(decision: AccessDecision, role: Role) -> &'static str {
    match decision {
        AccessDecision::Unlocked => "",
        AccessDecision::LockedUpgrade => match role {
            Role::Free => "Become a member to unlock this course.",
            Role::Trial => "Upgrade your trial to a full membership to unlock this course.",
            Role::Downsell => "Move up to the full membership to unlock this course.",
            // Premium roles only see this for content that cannot be classified.
            Role::Monthly | Role::Annual | Role::Admin => UNKNOWN_COURSE_MESSAGE,
        },
        AccessDecision::LockedProgress => {
            "Complete the previous steps in this section to unlock this content."
        }
        AccessDecision::LockedPurchase => {
            if role.is_premium() {
                "Masterclasses are sold separately and are not included in your membership."
            } else {
                "Purchase this masterclass to get access."
            }
        }
    }
}

/// Call-to-action for a decision. `None` only for `Unlocked`.
pub fn cta_for(decision: AccessDecision, role: Role) -> Option<Cta> {
    let cta = match decision {
        AccessDecision::Unlocked => return None,
        AccessDecision::LockedUpgrade => match role {
            Role::Free => Cta::new("Join now", CtaAction::Upgrade),
            Role::Trial => Cta::new("Upgrade now", CtaAction::Upgrade),
            Role::Downsell => Cta::new("Get full access", CtaAction::Upgrade),
            Role::Monthly | Role::Annual | Role::Admin => {
                Cta::new("Contact support", CtaAction::ContactSupport)
            }
        },
        AccessDecision::LockedProgress => {
            Cta::new("Continue where you left off", CtaAction::ContinueCourse)
        }
        AccessDecision::LockedPurchase => Cta::new("Buy masterclass", CtaAction::Purchase),
    };
    Some(cta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_total() {
        for role in Role::ALL {
            for decision in AccessDecision::ALL {
                let message = lock_message(decision, role);
                assert_eq!(message.is_empty(), decision.is_unlocked(), "{decision} / {role}");
                assert_eq!(cta_for(decision, role).is_none(), decision.is_unlocked());
            }
        }
    }

    #[test]
    fn wording_follows_role() {
        assert_ne!(
            lock_message(AccessDecision::LockedUpgrade, Role::Trial),
            lock_message(AccessDecision::LockedUpgrade, Role::Free)
        );
        assert_eq!(
            cta_for(AccessDecision::LockedPurchase, Role::Admin).map(|c| c.action),
            Some(CtaAction::Purchase)
        );
    }
}
