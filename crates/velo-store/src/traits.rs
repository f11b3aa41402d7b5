//! The durable key-value storage abstraction.
//!
//! Every persistent store in this crate talks to storage through
//! [`StringStore`], so the same store logic runs against the file-backed
//! backend in production and the in-memory backend in tests.

use crate::error::StoreResult;

/// Durable key-value string storage.
///
/// The contract is deliberately small: whole-value reads and whole-value
/// overwrites by key, which is all the state containers need. There are no
/// partial updates; callers always write a complete serialized document.
///
/// Implementations are synchronous. The client layer runs single-threaded
/// turns, and a mutation must have reached the backend before the
/// operation that caused it returns.
pub trait StringStore {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrites the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes the value stored under `key`. Removing an absent key is
    /// not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
