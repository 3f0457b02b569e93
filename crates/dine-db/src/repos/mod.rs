//! Repository modules implementing CRUD operations for all Dine entities.
//!
//! Each module adds methods to `DineService` via `impl DineService` blocks.

pub mod item;
pub mod photo;
pub mod restaurant;
pub mod search;
pub mod visit;
