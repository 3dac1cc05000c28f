//! Chain hashing for the Tithe donation ledger.
//!
//! Every entry carries a [`LinkHash`](tithe_types::LinkHash) derived from its
//! predecessor, and verification recomputes those digests across the whole
//! sequence. This crate owns the two encodings the chain depends on:
//!
//! - the canonical JSON form of an optional predecessor entry (the literal
//!   `null` when there is none), digested into the next entry's hash, and
//! - the forward link formula `digest(prev_hex ‖ id ‖ name ‖ amount ‖ date)`
//!   used when an entry is created.
//!
//! Both encodings are frozen. Every stored hash was produced against them, so
//! any change (field order, amount rendering, hex casing) silently breaks
//! verification of all existing ledgers.

pub mod chain;
pub mod hasher;

pub use chain::{
    amount_text, canonical_json, link_hash, predecessor_digest, ChainError, ChainVerifier,
};
pub use hasher::digest;
