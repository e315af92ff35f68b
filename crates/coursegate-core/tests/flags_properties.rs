//! Property tests for the role partition and flag merging

use coursegate_core::{CourseId, Role, UserFlags};
use proptest::prelude::*;

fn arb_role() -> impl Strategy<Value = Role> {
    prop::sample::select(Role::ALL.to_vec())
}

fn arb_flags() -> impl Strategy<Value = UserFlags> {
    (
        arb_role(),
        any::<bool>(),
        any::<bool>(),
        prop::collection::btree_set("[a-c]{1,2}", 0..4),
    )
        .prop_map(|(role, pressed_not_ready, blueprint_done, purchases)| UserFlags {
            role,
            pressed_not_ready,
            blueprint_done,
            purchased_masterclasses: purchases.into_iter().map(CourseId::new).collect(),
        })
}

proptest! {
    /// Every role is either premium or trial-like, never both.
    #[test]
    fn role_partition(role in arb_role()) {
        prop_assert!(role.is_premium() != role.is_trial_like());
    }

    /// Strict parsing of a role's own code returns that role.
    #[test]
    fn role_code_parses_back(role in arb_role()) {
        prop_assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        prop_assert_eq!(Role::normalize(&role.as_str().to_uppercase()), role);
    }

    /// Any string either parses to a role or normalizes to free.
    #[test]
    fn arbitrary_role_string_never_escalates(raw in ".{0,12}") {
        let role = Role::normalize(&raw);
        if raw.parse::<Role>().is_err() {
            prop_assert_eq!(role, Role::Free);
        }
    }

    /// Joining never loses a one-way flag or purchase.
    #[test]
    fn join_is_monotonic(a in arb_flags(), b in arb_flags()) {
        let joined = a.join(&b);
        prop_assert!(joined.pressed_not_ready >= a.pressed_not_ready);
        prop_assert!(joined.blueprint_done >= b.blueprint_done);
        prop_assert!(joined.purchased_masterclasses.is_superset(&a.purchased_masterclasses));
        prop_assert!(joined.purchased_masterclasses.is_superset(&b.purchased_masterclasses));
        prop_assert_eq!(joined.role, b.role);
    }

    /// Joining with itself is a no-op.
    #[test]
    fn join_idempotent(a in arb_flags()) {
        prop_assert_eq!(a.join(&a), a);
    }

    /// Apart from the role, join does not depend on argument order.
    #[test]
    fn join_commutes_except_role(a in arb_flags(), b in arb_flags()) {
        let ab = a.join(&b);
        let ba = b.join(&a);
        prop_assert_eq!(ab.pressed_not_ready, ba.pressed_not_ready);
        prop_assert_eq!(ab.blueprint_done, ba.blueprint_done);
        prop_assert_eq!(ab.purchased_masterclasses, ba.purchased_masterclasses);
    }
}
