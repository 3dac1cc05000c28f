use tithe_types::EntryId;

/// Source of entry timestamps.
///
/// The ledger records the string verbatim and never parses or orders it.
pub trait Clock: Send + Sync {
    /// The current time as a string.
    fn now(&self) -> String;
}

/// System clock emitting RFC 3339 UTC timestamps.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        chrono::Utc::now().to_rfc3339()
    }
}

/// Source of fresh entry ids. Uniqueness is the only requirement.
pub trait IdMint: Send + Sync {
    /// Mint a fresh unique id.
    fn mint(&self) -> EntryId;
}

/// UUID v7 id mint.
pub struct UuidMint;

impl IdMint for UuidMint {
    fn mint(&self) -> EntryId {
        EntryId::new(uuid::Uuid::now_v7().to_string())
    }
}
