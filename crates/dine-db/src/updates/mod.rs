//! Partial update types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are merged onto the stored record by `apply_to`, which reports
//! whether anything actually changed. Parent foreign keys are never part of
//! an update.

pub mod item;
pub mod photo;
pub mod restaurant;
pub mod visit;
