use std::sync::RwLock;

use async_trait::async_trait;
use tithe_types::Entry;

use crate::error::StoreResult;
use crate::traits::LedgerStore;

/// In-memory store for tests and embedding.
///
/// The sequence is held behind an `RwLock`; entries are cloned on load and
/// save, matching the no-shared-cache behavior of the file store.
pub struct InMemoryStore {
    entries: RwLock<Vec<Entry>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Replace the stored sequence directly. Test hook for seeding state or
    /// simulating out-of-band edits to the persisted file.
    pub fn set(&self, entries: Vec<Entry>) {
        *self.entries.write().expect("lock poisoned") = entries;
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerStore for InMemoryStore {
    async fn load(&self) -> Vec<Entry> {
        self.entries.read().expect("lock poisoned").clone()
    }

    async fn save(&self, entries: &[Entry]) -> StoreResult<()> {
        *self.entries.write().expect("lock poisoned") = entries.to_vec();
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("entry_count", &self.len())
            .finish()
    }
}
