use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use tithe_types::Entry;

use crate::error::{StoreError, StoreResult};
use crate::traits::LedgerStore;

/// Whole-file JSON store.
///
/// The entire chain lives in a single JSON array at `path`. `load` reads and
/// parses the whole file; `save` rewrites it from scratch, creating the
/// parent directory if needed. The write is not atomic: a reader racing a
/// save may observe a partial file, which then loads as empty under the
/// corrupt-reads-as-genesis policy.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path. Nothing is touched on
    /// disk until the first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LedgerStore for JsonFileStore {
    async fn load(&self) -> Vec<Entry> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "store unreadable; loading as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "store unparsable; loading as empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, entries: &[Entry]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let bytes =
            serde_json::to_vec(entries).map_err(|e| StoreError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, bytes).await?;
        debug!(path = %self.path.display(), count = entries.len(), "sequence saved");
        Ok(())
    }
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tithe_types::{EntryId, LinkHash};

    fn make_entry(seq: u8) -> Entry {
        Entry {
            id: EntryId::new(format!("entry-{seq}")),
            name: format!("donor-{seq}"),
            amount: seq as f64,
            date: "2024-05-01T12:00:00+00:00".into(),
            hash: LinkHash::from_hash([seq; 32]),
        }
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));

        let entries = vec![make_entry(1), make_entry(2)];
        store.save(&entries).await.unwrap();
        assert_eq!(store.load().await, entries);
    }

    #[tokio::test]
    async fn save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data/nested/ledger.json"));

        store.save(&[make_entry(1)]).await.unwrap();
        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test]
    async fn save_overwrites_the_whole_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));

        store.save(&[make_entry(1), make_entry(2)]).await.unwrap();
        store.save(&[make_entry(3)]).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "donor-3");
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_hash_field_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        // Valid JSON, but the hash is not 64 hex chars.
        std::fs::write(
            &path,
            br#"[{"id":"e","name":"n","amount":1.0,"date":"d","hash":"beef"}]"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn persisted_form_is_a_single_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let store = JsonFileStore::new(&path);

        store.save(&[make_entry(1)]).await.unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.ends_with(']'));
        assert!(raw.contains("\"hash\":"));
    }

    #[test]
    fn debug_format_names_the_path() {
        let store = JsonFileStore::new("/tmp/ledger.json");
        assert!(format!("{store:?}").contains("ledger.json"));
    }
}
