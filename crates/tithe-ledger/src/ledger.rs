use tracing::{debug, warn};

use tithe_crypto::{link_hash, predecessor_digest, ChainVerifier};
use tithe_store::LedgerStore;
use tithe_types::{Donation, Entry, EntryId};

use crate::error::LedgerError;
use crate::providers::{Clock, IdMint, SystemClock, UuidMint};

/// Append-only donation ledger over a [`LedgerStore`].
///
/// Every operation materializes the full sequence from the store, works on it
/// in memory, and (for `append`) writes the whole sequence back. No state is
/// cached between calls, so reads always reflect the latest completed save.
///
/// There is no concurrency control: two racing `append` calls each load the
/// same tail, and the loser's write is overwritten on disk even though its
/// entry was returned to the caller.
pub struct Ledger<S> {
    store: S,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdMint>,
}

impl<S: LedgerStore> Ledger<S> {
    /// Ledger with the system providers (RFC 3339 clock, UUID v7 ids).
    pub fn new(store: S) -> Self {
        Self::with_providers(store, Box::new(SystemClock), Box::new(UuidMint))
    }

    /// Ledger with injected providers. Tests use this to pin ids and
    /// timestamps.
    pub fn with_providers(store: S, clock: Box<dyn Clock>, ids: Box<dyn IdMint>) -> Self {
        Self { store, clock, ids }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append one donation as a new chained entry and persist the sequence.
    ///
    /// The new entry's hash covers the digest of the current tail (or of the
    /// canonical no-predecessor form for a fresh ledger) concatenated with
    /// the entry's own id, name, amount, and date. Save failures propagate;
    /// there is no retry and nothing to roll back since nothing was
    /// persisted.
    pub async fn append(&self, donation: &Donation) -> Result<Entry, LedgerError> {
        let date = self.clock.now();
        let id = self.ids.mint();

        let mut entries = self.store.load().await;
        let prev = predecessor_digest(entries.last())?;
        let hash = link_hash(&prev, &id, &donation.name, donation.amount, &date);

        let entry = Entry {
            id,
            name: donation.name.clone(),
            amount: donation.amount,
            date,
            hash,
        };
        entries.push(entry.clone());
        self.store.save(&entries).await?;

        debug!(id = %entry.id, seq = entries.len(), "entry appended");
        Ok(entry)
    }

    /// Verify backward linkage across the whole persisted sequence.
    ///
    /// Returns `true` when every entry's stored hash matches the digest of
    /// its predecessor's canonical form; chains of length 0 or 1 are
    /// vacuously valid. Never errors: an unreadable store loads as empty,
    /// which verifies.
    pub async fn verify(&self) -> bool {
        let entries = self.store.load().await;
        match ChainVerifier::verify(&entries) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "chain verification failed");
                false
            }
        }
    }

    /// The full sequence, or empty when the store is unreadable.
    pub async fn find_all(&self) -> Vec<Entry> {
        self.store.load().await
    }

    /// First entry with the given id, if any.
    pub async fn find_by_id(&self, id: &EntryId) -> Option<Entry> {
        self.store
            .load()
            .await
            .into_iter()
            .find(|entry| entry.id == *id)
    }

    /// The chain tail, if any.
    pub async fn find_last(&self) -> Option<Entry> {
        self.store.load().await.pop()
    }
}
