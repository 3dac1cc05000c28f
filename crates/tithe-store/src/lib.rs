//! Whole-sequence persistence for the Tithe donation ledger.
//!
//! The entire chain is one serialized collection: a single JSON array of
//! entry records. There is no index, no envelope, and no per-entry file.
//! Every operation above this crate loads the full sequence, works on it in
//! memory, and (for appends) writes the full sequence back.
//!
//! # Storage Backends
//!
//! All backends implement the [`LedgerStore`] trait:
//!
//! - [`JsonFileStore`] — one JSON file on disk
//! - [`InMemoryStore`] — `Vec`-behind-a-lock store for tests and embedding
//!
//! # Design Rules
//!
//! 1. `load` never fails: missing or corrupt storage reads as a fresh, empty
//!    ledger. Corruption is logged but not surfaced.
//! 2. `save` overwrites the whole persisted representation. No partial or
//!    streaming writes, and no atomicity with respect to concurrent readers.
//! 3. Write failures are propagated, never silently ignored.
//! 4. The store never interprets entries; chain logic lives above it.

pub mod error;
pub mod json_file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use traits::LedgerStore;
