//! Flag repositories
//!
//! The evaluator never touches storage. Callers load a `UserFlags` snapshot
//! from a `FlagsRepository`, evaluate, and save any changes back.

use crate::layout::{decode_flags, write_flags};
use crate::{FlagsResult, KeyValueStore};
use coursegate_core::{Role, UserFlags};

/// Source and sink of user flags.
pub trait FlagsRepository: Send + Sync {
    /// Read the current flags.
    fn load(&self) -> FlagsResult<UserFlags>;

    /// Persist flags.
    fn save(&self, flags: &UserFlags) -> FlagsResult<()>;
}

impl<R: FlagsRepository + ?Sized> FlagsRepository for Box<R> {
    fn load(&self) -> FlagsResult<UserFlags> {
        (**self).load()
    }

    fn save(&self, flags: &UserFlags) -> FlagsResult<()> {
        (**self).save(flags)
    }
}

/// Repository over a key/value store using the persisted layout.
#[derive(Debug, Clone)]
pub struct StoredFlags<S> {
    store: S,
}

impl<S: KeyValueStore> StoredFlags<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> FlagsRepository for StoredFlags<S> {
    fn load(&self) -> FlagsResult<UserFlags> {
        decode_flags(&self.store)
    }

    fn save(&self, flags: &UserFlags) -> FlagsResult<()> {
        write_flags(&self.store, flags)?;
        tracing::info!(
            role = %flags.role,
            pressed_not_ready = flags.pressed_not_ready,
            blueprint_done = flags.blueprint_done,
            purchases = flags.purchased_masterclasses.len(),
            "saved user flags"
        );
        Ok(())
    }
}

/// Role-switching overlay for manual QA.
///
/// Loads report the forced role; saves keep whatever role the wrapped
/// repository already holds, so the override is never persisted.
#[derive(Debug, Clone)]
pub struct RoleOverride<R> {
    inner: R,
    role: Role,
}

impl<R: FlagsRepository> RoleOverride<R> {
    /// Force `role` on top of `inner`.
    pub fn new(inner: R, role: Role) -> Self {
        Self { inner, role }
    }

    /// The forced role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The wrapped repository.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: FlagsRepository> FlagsRepository for RoleOverride<R> {
    fn load(&self) -> FlagsResult<UserFlags> {
        let mut flags = self.inner.load()?;
        if flags.role != self.role {
            tracing::debug!(stored = %flags.role, forced = %self.role, "role override active");
        }
        flags.role = self.role;
        Ok(flags)
    }

    fn save(&self, flags: &UserFlags) -> FlagsResult<()> {
        let stored_role = self.inner.load()?.role;
        let flags = UserFlags {
            role: stored_role,
            ..flags.clone()
        };
        self.inner.save(&flags)
    }
}
