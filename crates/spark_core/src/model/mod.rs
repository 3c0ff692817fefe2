//! Domain model for the creator registry.
//!
//! # Responsibility
//! - Define the record shape used by store and service layers.
//!
//! # Invariants
//! - A creator is identified by its handle, compared case-insensitively.
//! - Records are never deleted; only `note` and `last_boosted` mutate.

pub mod creator;
