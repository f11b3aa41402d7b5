//! In-memory implementation of the StringStore trait.
//!
//! This is primarily for testing and for sessions that should not outlive
//! the process. It has the same semantics as the file backend but keeps
//! everything in a map with no persistence.

use std::collections::HashMap;

use crate::error::StoreResult;
use crate::traits::StringStore;

/// In-memory store implementation.
///
/// All data is lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored. Test helper.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
