//! Persisted flag layout
//!
//! ```text
//! user_role                "free" | "trial" | "monthly" | "annual" | "downsell" | "admin"
//! pressed_not_ready        "true" | "false"
//! blueprint_done           "true" | "false"
//! purchased_masterclasses  JSON array of course ids
//! ```
//!
//! Decoding never fails on bad values. Unknown roles become `free`, anything
//! other than `"true"` is false, and a malformed purchase list is empty.

use crate::{FlagsResult, KeyValueStore};
use coursegate_core::{CourseId, Role, UserFlags};
use std::collections::BTreeSet;

/// Key holding the role code.
pub const ROLE_KEY: &str = "user_role";
/// Key holding the not-ready flag.
pub const PRESSED_NOT_READY_KEY: &str = "pressed_not_ready";
/// Key holding the blueprint completion flag.
pub const BLUEPRINT_DONE_KEY: &str = "blueprint_done";
/// Key holding the purchased masterclass list.
pub const PURCHASED_MASTERCLASSES_KEY: &str = "purchased_masterclasses";

/// Every key this layout uses.
pub const ALL_KEYS: [&str; 4] = [
    ROLE_KEY,
    PRESSED_NOT_READY_KEY,
    BLUEPRINT_DONE_KEY,
    PURCHASED_MASTERCLASSES_KEY,
];

fn decode_bool(raw: Option<&str>) -> bool {
    raw.map(str::trim) == Some("true")
}

fn decode_purchases(raw: Option<&str>) -> BTreeSet<CourseId> {
    let Some(raw) = raw else {
        return BTreeSet::new();
    };
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(ids) => ids
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .map(CourseId::new)
            .collect(),
        Err(error) => {
            tracing::warn!(%error, "malformed purchase list, treating as empty");
            BTreeSet::new()
        }
    }
}

/// Rebuild flags from a store.
pub fn decode_flags<S: KeyValueStore + ?Sized>(store: &S) -> FlagsResult<UserFlags> {
    let role = store
        .get(ROLE_KEY)?
        .map(|raw| Role::normalize(&raw))
        .unwrap_or_default();

    Ok(UserFlags {
        role,
        pressed_not_ready: decode_bool(store.get(PRESSED_NOT_READY_KEY)?.as_deref()),
        blueprint_done: decode_bool(store.get(BLUEPRINT_DONE_KEY)?.as_deref()),
        purchased_masterclasses: decode_purchases(
            store.get(PURCHASED_MASTERCLASSES_KEY)?.as_deref(),
        ),
    })
}

/// Flags as key/value pairs.
pub fn encode_flags(flags: &UserFlags) -> FlagsResult<Vec<(&'static str, String)>> {
    let purchases: Vec<&str> = flags
        .purchased_masterclasses
        .iter()
        .map(CourseId::as_str)
        .collect();

    Ok(vec![
        (ROLE_KEY, flags.role.as_str().to_string()),
        (PRESSED_NOT_READY_KEY, flags.pressed_not_ready.to_string()),
        (BLUEPRINT_DONE_KEY, flags.blueprint_done.to_string()),
        (PURCHASED_MASTERCLASSES_KEY, serde_json::to_string(&purchases)?),
    ])
}

/// Write flags to a store in one batch.
pub fn write_flags<S: KeyValueStore + ?Sized>(store: &S, flags: &UserFlags) -> FlagsResult<()> {
    store.set_all(&encode_flags(flags)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn empty_store_decodes_to_default() {
        let flags = decode_flags(&MemoryStore::new()).unwrap();
        assert_eq!(flags, UserFlags::default());
    }

    #[test]
    fn stored_strings_decode() {
        let store = MemoryStore::with_entries([
            (ROLE_KEY, "Annual"),
            (PRESSED_NOT_READY_KEY, "true"),
            (BLUEPRINT_DONE_KEY, "false"),
            (PURCHASED_MASTERCLASSES_KEY, r#"["mc-a", " mc-b ", ""]"#),
        ]);
        let flags = decode_flags(&store).unwrap();
        assert_eq!(flags.role, Role::Annual);
        assert!(flags.pressed_not_ready);
        assert!(!flags.blueprint_done);
        assert_eq!(flags.purchased_masterclasses.len(), 2);
        assert!(flags.has_purchased(&CourseId::new("mc-b")));
    }

    #[test]
    fn bad_values_fail_closed() {
        let store = MemoryStore::with_entries([
            (ROLE_KEY, "owner"),
            (PRESSED_NOT_READY_KEY, "yes"),
            (BLUEPRINT_DONE_KEY, "1"),
            (PURCHASED_MASTERCLASSES_KEY, "mc-a,mc-b"),
        ]);
        assert_eq!(decode_flags(&store).unwrap(), UserFlags::default());
    }

    #[test]
    fn encoded_layout_uses_string_values() {
        let flags = UserFlags::new(Role::Trial)
            .with_blueprint_done()
            .with_purchase("mc-a");
        let store = MemoryStore::new();
        write_flags(&store, &flags).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot[ROLE_KEY], "trial");
        assert_eq!(snapshot[PRESSED_NOT_READY_KEY], "false");
        assert_eq!(snapshot[BLUEPRINT_DONE_KEY], "true");
        assert_eq!(snapshot[PURCHASED_MASTERCLASSES_KEY], r#"["mc-a"]"#);
        assert_eq!(decode_flags(&store).unwrap(), flags);
    }
}
