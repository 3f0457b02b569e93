//! # dine-core
//!
//! Core types, id prefixes, rating engine and error types for Dine.
//!
//! This crate provides the foundational types shared across all Dine crates:
//! - Entity structs for restaurants, visits, visit items and visit photos
//! - Status, sentiment and service enums
//! - Id prefix constants
//! - The rating engine deriving a restaurant's aggregate thumb
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod rating;
