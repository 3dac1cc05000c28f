//! Foundation types for the Tithe donation ledger.
//!
//! Tithe keeps an append-only sequence of donation records, each bound to its
//! predecessor by a content hash. This crate provides the record types shared
//! by every other Tithe crate.
//!
//! # Key Types
//!
//! - [`Entry`] — one donation record: id, name, amount, date, linkage hash
//! - [`Donation`] — the caller-supplied content appended as a new entry
//! - [`EntryId`] — opaque unique identifier assigned at creation
//! - [`LinkHash`] — 256-bit linkage digest, persisted as lowercase hex

pub mod entry;
pub mod error;
pub mod hash;
pub mod id;

pub use entry::{Donation, Entry};
pub use error::TypeError;
pub use hash::LinkHash;
pub use id::EntryId;
