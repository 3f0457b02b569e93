//! # dine-db
//!
//! Snapshot persistence and repositories for Dine.
//!
//! Handles all stored state: restaurants, visits, visit items and visit
//! photos. The dataset is one JSON snapshot loaded in full for every read
//! and saved in full after every mutation. Repositories enforce referential
//! integrity: children can only be created under existing parents, and
//! deletes cascade downward through [`cascade::CascadePlan`].

#![allow(clippy::unused_async)]

pub mod cascade;
pub mod error;
pub mod repos;
pub mod service;
pub mod store;
pub mod updates;

#[cfg(test)]
mod test_support;

pub use error::DatabaseError;
pub use service::DineService;
pub use store::{BlobStore, FileBlobStore, MemoryBlobStore, Snapshot, SnapshotStore};
