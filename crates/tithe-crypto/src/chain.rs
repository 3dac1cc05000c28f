use tithe_types::{Entry, EntryId, LinkHash};

use crate::hasher::digest;

/// Canonical textual form of an optional predecessor entry.
///
/// `None` encodes as the literal `null`, which is the pinned "no predecessor"
/// form; `Some` encodes as the entry object in declaration field order with
/// the hash as lowercase hex. Non-finite amounts encode as JSON `null`, which
/// is still deterministic.
pub fn canonical_json(entry: Option<&Entry>) -> Result<String, ChainError> {
    serde_json::to_string(&entry).map_err(|e| ChainError::Serialization(e.to_string()))
}

/// Digest of the predecessor an entry links to.
///
/// For a genesis entry there is no predecessor and the digest covers the
/// canonical `null` form, so genesis linkage is reproducible like any other.
pub fn predecessor_digest(last: Option<&Entry>) -> Result<LinkHash, ChainError> {
    Ok(digest(canonical_json(last)?.as_bytes()))
}

/// Textual form of an amount inside the link formula.
///
/// The `f64` `Display` rendering: shortest form that round-trips, so `10.0`
/// renders as `10`. Frozen alongside the rest of the encoding.
pub fn amount_text(amount: f64) -> String {
    amount.to_string()
}

/// Hash of a new entry: the predecessor digest concatenated with the entry's
/// own id, name, amount, and date, in that fixed order, digested once.
pub fn link_hash(prev: &LinkHash, id: &EntryId, name: &str, amount: f64, date: &str) -> LinkHash {
    let mut input = String::with_capacity(64 + id.as_str().len() + name.len() + date.len() + 24);
    input.push_str(&prev.to_hex());
    input.push_str(id.as_str());
    input.push_str(name);
    input.push_str(&amount_text(amount));
    input.push_str(date);
    digest(input.as_bytes())
}

/// Backward-linkage chain verifier.
///
/// Checks that every entry's stored hash equals the digest of its
/// predecessor's canonical form. It does not recompute the forward formula
/// from entry creation, so the final entry's own fields are covered by no
/// check; only a successor would check them.
pub struct ChainVerifier;

impl ChainVerifier {
    /// Walk the chain and report the first broken link.
    ///
    /// Chains of length 0 or 1 are vacuously valid.
    pub fn verify(entries: &[Entry]) -> Result<(), ChainError> {
        if entries.len() <= 1 {
            return Ok(());
        }

        for index in 1..entries.len() {
            let expected = predecessor_digest(Some(&entries[index - 1]))?;
            if entries[index].hash != expected {
                return Err(ChainError::LinkMismatch { index });
            }
        }

        Ok(())
    }
}

/// Errors from chain hashing and verification.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("broken link at index {index}: stored hash does not match predecessor digest")]
    LinkMismatch { index: usize },

    #[error("serialization error: {0}")]
    Serialization(String),
}
