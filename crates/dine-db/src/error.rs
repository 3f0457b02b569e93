//! Database error types for dine-db.

use dine_core::enums::EntityKind;
use thiserror::Error;

/// Errors from repository operations.
///
/// Reads never fail: a missing or corrupt snapshot loads as empty. Only
/// writes and lookups that require an existing record produce errors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The referenced record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    /// Writing the snapshot blob failed.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the snapshot failed.
    #[error("Snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity: EntityKind, id: &str) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
