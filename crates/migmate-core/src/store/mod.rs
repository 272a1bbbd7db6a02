//! State persistence behind a minimal key-value interface.
//!
//! The derivation core never talks to storage directly; it is handed a
//! [`Profile`](crate::models::Profile) and a
//! [`CompletionMap`](crate::models::CompletionMap) that were loaded
//! through this module. Two backends exist: [`SqliteStore`] for real use
//! and [`MemoryStore`] for tests. The codec and versioned keys live in
//! [`state`].

pub mod memory;
pub mod sqlite;
pub mod state;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::Result;

/// Minimal key-value contract the planner persists through.
///
/// Values are opaque serialized documents; the store neither inspects nor
/// validates them. Reads of absent keys are `Ok(None)`, not errors.
pub trait KeyValueStore {
    /// Read the value stored under a key, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value under a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Drop a key and its value. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}
