use serde::{Deserialize, Serialize};

use crate::hash::LinkHash;
use crate::id::EntryId;

/// One donation record in the chain.
///
/// Immutable once created. Field order is pinned: the canonical JSON encoding
/// of an entry (this declaration order, hash as lowercase hex) is the exact
/// byte form digested into its successor's hash, so reordering or renaming
/// fields invalidates every hash recorded before the change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Opaque unique id assigned at creation, never reused.
    pub id: EntryId,
    /// Caller-supplied label, unconstrained content.
    pub name: String,
    /// Caller-supplied amount, unconstrained sign and range.
    pub amount: f64,
    /// Creation-time string from the time provider, stored verbatim.
    pub date: String,
    /// Linkage hash computed at creation.
    pub hash: LinkHash,
}

/// Caller-supplied content for a new entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    pub name: String,
    pub amount: f64,
}

impl Donation {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry {
            id: EntryId::new("e-1"),
            name: "Alice".into(),
            amount: 10.0,
            date: "2024-05-01T12:00:00+00:00".into(),
            hash: LinkHash::from_hash([0; 32]),
        }
    }

    #[test]
    fn json_field_order_is_pinned() {
        let json = serde_json::to_string(&entry()).unwrap();
        let expected = format!(
            "{{\"id\":\"e-1\",\"name\":\"Alice\",\"amount\":10.0,\
             \"date\":\"2024-05-01T12:00:00+00:00\",\"hash\":\"{}\"}}",
            "00".repeat(32)
        );
        assert_eq!(json, expected);
    }

    #[test]
    fn serde_roundtrip() {
        let original = entry();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn donation_new() {
        let donation = Donation::new("Bob", -5.5);
        assert_eq!(donation.name, "Bob");
        assert_eq!(donation.amount, -5.5);
    }
}
