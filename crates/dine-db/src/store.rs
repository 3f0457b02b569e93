//! Snapshot persistence.
//!
//! The whole dataset lives in one JSON blob with four collections
//! (`restaurants`, `visits`, `visitItems`, `visitPhotos`). Every read loads
//! the full snapshot; every mutation saves it back in full. The blob itself
//! sits behind [`BlobStore`] so the same code runs against a file on disk or
//! a buffer in memory.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dine_core::entities::{Restaurant, Visit, VisitItem, VisitPhoto};
use dine_core::ids::format_id;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::DatabaseError;

/// Opaque load/save primitive for the serialized snapshot.
pub trait BlobStore: Send + Sync {
    /// Read the stored blob. `Ok(None)` means nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn read(&self) -> io::Result<Option<Vec<u8>>>;

    /// Replace the stored blob. Readers never observe a partial write.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    fn write(&self, bytes: &[u8]) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// FileBlobStore
// ---------------------------------------------------------------------------

/// Blob stored in a single file, replaced atomically via rename.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    path: PathBuf,
}

impl FileBlobStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        let dir = self.dir();
        std::fs::create_dir_all(dir)?;

        // Temp file must share the target's filesystem for rename to be atomic.
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryBlobStore
// ---------------------------------------------------------------------------

/// Blob held in memory. Used for tests and `:memory:` stores.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blob: Mutex<Option<Vec<u8>>>,
}

impl MemoryBlobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing contents, e.g. a hand-written or corrupt snapshot.
    #[must_use]
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Mutex::new(Some(bytes.into())),
        }
    }
}

fn poisoned() -> io::Error {
    io::Error::other("memory blob lock poisoned")
}

impl BlobStore for MemoryBlobStore {
    fn read(&self) -> io::Result<Option<Vec<u8>>> {
        let guard = self.blob.lock().map_err(|_| poisoned())?;
        Ok(guard.clone())
    }

    fn write(&self, bytes: &[u8]) -> io::Result<()> {
        let mut guard = self.blob.lock().map_err(|_| poisoned())?;
        *guard = Some(bytes.to_vec());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The complete persisted dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub restaurants: Vec<Restaurant>,
    pub visits: Vec<Visit>,
    pub visit_items: Vec<VisitItem>,
    pub visit_photos: Vec<VisitPhoto>,
}

impl Snapshot {
    /// Decode a stored blob, degrading to empty collections instead of failing.
    ///
    /// Each collection is decoded on its own: a malformed `visits` array does
    /// not cost the restaurants. Within a collection decoding is all or
    /// nothing, so one bad record empties its whole collection. The next save
    /// writes that empty collection back, which makes the loss permanent.
    #[must_use]
    pub fn decode(bytes: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(%error, "snapshot is not valid JSON; starting from an empty snapshot");
                return Self::default();
            }
        };

        let Value::Object(map) = value else {
            tracing::warn!("snapshot is not a JSON object; starting from an empty snapshot");
            return Self::default();
        };

        Self {
            restaurants: decode_collection(&map, "restaurants"),
            visits: decode_collection(&map, "visits"),
            visit_items: decode_collection(&map, "visitItems"),
            visit_photos: decode_collection(&map, "visitPhotos"),
        }
    }

    /// Whether any entity of any kind already uses `id`.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.restaurants.iter().any(|r| r.id == id)
            || self.visits.iter().any(|v| v.id == id)
            || self.visit_items.iter().any(|i| i.id == id)
            || self.visit_photos.iter().any(|p| p.id == id)
    }
}

fn decode_collection<T: DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Vec<T> {
    match map.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|error| {
            tracing::warn!(
                collection = key,
                %error,
                "snapshot collection is malformed; treating it as empty"
            );
            Vec::new()
        }),
    }
}

// ---------------------------------------------------------------------------
// SnapshotStore
// ---------------------------------------------------------------------------

/// Loads and saves [`Snapshot`]s and mints entity ids.
pub struct SnapshotStore {
    blob: Box<dyn BlobStore>,
}

impl SnapshotStore {
    pub fn new(blob: impl BlobStore + 'static) -> Self {
        Self {
            blob: Box::new(blob),
        }
    }

    /// Store backed by a JSON file. The file is created on first save.
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileBlobStore::new(path))
    }

    /// Store that lives only as long as this value.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryBlobStore::new())
    }

    /// Load the full snapshot. Never fails: missing or unreadable data loads as empty.
    #[must_use]
    pub fn load(&self) -> Snapshot {
        match self.blob.read() {
            Ok(Some(bytes)) => Snapshot::decode(&bytes),
            Ok(None) => Snapshot::default(),
            Err(error) => {
                tracing::warn!(%error, "failed to read snapshot; starting from an empty snapshot");
                Snapshot::default()
            }
        }
    }

    /// Serialize and overwrite the stored snapshot in one blob write.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Encode` or `DatabaseError::Io`.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), DatabaseError> {
        let bytes = serde_json::to_vec(snapshot)?;
        self.blob.write(&bytes)?;
        Ok(())
    }

    /// Mint a new id, e.g. `"rest_3f2a9c0e5b7d4e1f8a6b2c3d4e5f6a7b"`.
    #[must_use]
    pub fn create_id(&self, prefix: &str) -> String {
        format_id(prefix, &Uuid::new_v4().simple().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use dine_core::enums::RestaurantStatus;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn restaurant(id: &str) -> Restaurant {
        Restaurant {
            id: id.into(),
            name: "Taco Hut".into(),
            status: RestaurantStatus::Wishlist,
            cuisines: vec!["mexican".into()],
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_store_loads_empty_snapshot() {
        let store = SnapshotStore::in_memory();
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let store = SnapshotStore::in_memory();
        let snapshot = Snapshot {
            restaurants: vec![restaurant("rest_1")],
            ..Snapshot::default()
        };
        store.save(&snapshot).unwrap();
        assert_eq!(store.load(), snapshot);
    }

    #[test]
    fn serialized_keys_use_collection_names() {
        let value = serde_json::to_value(Snapshot::default()).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["restaurants", "visitItems", "visitPhotos", "visits"]);
    }

    #[test]
    fn garbage_blob_loads_empty() {
        let store = SnapshotStore::new(MemoryBlobStore::with_contents("{not json"));
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn non_object_blob_loads_empty() {
        let store = SnapshotStore::new(MemoryBlobStore::with_contents("[1, 2, 3]"));
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn malformed_collection_degrades_independently() {
        let good = serde_json::to_value(vec![restaurant("rest_1")]).unwrap();
        let blob = serde_json::json!({
            "restaurants": good,
            "visits": "definitely not a list",
            "visitItems": [{"id": "item_1"}],
        });
        let store = SnapshotStore::new(MemoryBlobStore::with_contents(blob.to_string()));

        let snapshot = store.load();
        assert_eq!(snapshot.restaurants.len(), 1);
        assert!(snapshot.visits.is_empty());
        assert!(snapshot.visit_items.is_empty());
        assert!(snapshot.visit_photos.is_empty());
    }

    #[test]
    fn null_collections_load_empty() {
        let store = SnapshotStore::new(MemoryBlobStore::with_contents(
            r#"{"restaurants": null}"#,
        ));
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn create_id_has_prefix_and_is_unique() {
        let store = SnapshotStore::in_memory();
        let mut ids = HashSet::new();
        for _ in 0..200 {
            let id = store.create_id("visit");
            assert!(id.starts_with("visit_"), "unexpected id {id}");
            assert!(ids.insert(id.clone()), "duplicate id generated: {id}");
        }
    }

    #[test]
    fn contains_id_checks_every_collection() {
        let snapshot = Snapshot {
            restaurants: vec![restaurant("rest_1")],
            ..Snapshot::default()
        };
        assert!(snapshot.contains_id("rest_1"));
        assert!(!snapshot.contains_id("rest_2"));
    }

    #[test]
    fn file_store_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::open_file(dir.path().join("nested").join("dine.json"));
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn file_store_roundtrip_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dine.json");
        let store = SnapshotStore::open_file(&path);
        let snapshot = Snapshot {
            restaurants: vec![restaurant("rest_1")],
            ..Snapshot::default()
        };
        store.save(&snapshot).unwrap();

        assert!(path.exists());
        let reopened = SnapshotStore::open_file(&path);
        assert_eq!(reopened.load(), snapshot);
    }

    #[test]
    fn file_store_overwrite_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dine.json");
        let store = SnapshotStore::open_file(&path);
        store.save(&Snapshot::default()).unwrap();
        store
            .save(&Snapshot {
                restaurants: vec![restaurant("rest_2")],
                ..Snapshot::default()
            })
            .unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(store.load().restaurants[0].id, "rest_2");
    }

    #[test]
    fn file_store_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dine.json");
        std::fs::write(&path, b"\x00\x01 garbage").unwrap();
        let store = SnapshotStore::open_file(&path);
        assert_eq!(store.load(), Snapshot::default());
    }
}
