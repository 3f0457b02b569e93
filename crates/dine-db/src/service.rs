//! Service layer owning the snapshot store.
//!
//! `DineService` is constructed once at startup and shared by handle. All
//! repository methods are implemented as `impl DineService` blocks in
//! [`crate::repos`].

use std::path::PathBuf;

use dine_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::store::{BlobStore, Snapshot, SnapshotStore};

/// Entry point for every repository operation.
///
/// Every mutation follows the same protocol:
/// 1. Load the full snapshot
/// 2. Apply the change in memory
/// 3. Save the full snapshot
///
/// There is no locking between steps 1 and 3: two concurrent writers race and
/// the last save wins.
pub struct DineService {
    store: SnapshotStore,
}

impl DineService {
    #[must_use]
    pub const fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// Service backed by a JSON snapshot file.
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        Self::new(SnapshotStore::open_file(path))
    }

    /// Service backed by an in-memory snapshot.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(SnapshotStore::in_memory())
    }

    /// Service backed by any blob store.
    pub fn with_blob(blob: impl BlobStore + 'static) -> Self {
        Self::new(SnapshotStore::new(blob))
    }

    /// Access the underlying snapshot store.
    #[must_use]
    pub const fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Load the current snapshot for a read-only query.
    pub(crate) fn read(&self) -> Snapshot {
        self.store.load()
    }

    /// Run a read-modify-write cycle. Nothing is saved if `change` fails.
    pub(crate) fn mutate<T>(
        &self,
        change: impl FnOnce(&mut Snapshot) -> Result<T, DatabaseError>,
    ) -> Result<T, DatabaseError> {
        let mut snapshot = self.store.load();
        let out = change(&mut snapshot)?;
        self.store.save(&snapshot)?;
        Ok(out)
    }

    /// Mint an id of the given kind that is not yet used in `snapshot`.
    pub(crate) fn next_id(&self, snapshot: &Snapshot, kind: EntityKind) -> String {
        loop {
            let id = self.store.create_id(kind.id_prefix());
            if !snapshot.contains_id(&id) {
                return id;
            }
            tracing::debug!(%id, "id collision; drawing again");
        }
    }
}
