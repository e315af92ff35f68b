//! # Coursegate Flags - Flag Storage Adapters
//!
//! Producers of `UserFlags` for the evaluator. Storage is modelled as a
//! repository with `load` / `save`, layered over a string key/value store:
//!
//! - `store/` - `KeyValueStore` with in-memory and JSON-file implementations
//! - `layout/` - the persisted key layout and its lossy decoder
//! - `repository/` - `FlagsRepository`, `StoredFlags`, and the QA `RoleOverride`
//! - `mutation/` - the flag writes callers perform
//!
//! Bad stored values decode to the least-privileged value instead of failing.

#![forbid(unsafe_code)]

pub mod error;
pub mod layout;
pub mod mutation;
pub mod repository;
pub mod store;

pub use error::{FlagsError, FlagsResult};
pub use layout::{decode_flags, encode_flags, write_flags};
pub use mutation::{apply_mutation, update, FlagsMutation};
pub use repository::{FlagsRepository, RoleOverride, StoredFlags};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
