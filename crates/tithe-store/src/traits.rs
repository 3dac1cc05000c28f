use async_trait::async_trait;
use tithe_types::Entry;

use crate::error::StoreResult;

/// Whole-sequence ledger storage.
///
/// All implementations must satisfy these invariants:
/// - `load` returns the full persisted sequence in chain order. Any read or
///   parse failure yields an empty sequence: missing or corrupt storage reads
///   as a fresh ledger, never as an error.
/// - `save` overwrites the entire persisted representation with the given
///   sequence as one collection. No partial or streaming writes, and no
///   atomicity with respect to concurrent readers.
/// - Write failures are propagated, never silently ignored.
/// - The store never interprets entries; chain logic lives above it.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Read the full persisted sequence, or an empty one if unreadable.
    async fn load(&self) -> Vec<Entry>;

    /// Replace the persisted sequence with `entries`.
    async fn save(&self, entries: &[Entry]) -> StoreResult<()>;
}
