use tithe_crypto::ChainError;
use tithe_store::StoreError;

/// Errors produced by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The store rejected a write.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Canonical serialization failed while computing a linkage hash.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),
}
