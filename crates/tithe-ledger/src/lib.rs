//! Core chain logic for the Tithe donation ledger.
//!
//! The [`Ledger`] is a facade over a [`LedgerStore`](tithe_store::LedgerStore):
//! every operation materializes the full persisted sequence, works on it in
//! memory, and (for appends) writes the whole sequence back. Identifier and
//! timestamp generation are injected through the [`Clock`] and [`IdMint`]
//! provider traits so the chain logic stays deterministic under test.

pub mod error;
pub mod ledger;
pub mod providers;

pub use error::LedgerError;
pub use ledger::Ledger;
pub use providers::{Clock, IdMint, SystemClock, UuidMint};
