//! Roster domain model.
//!
//! # Responsibility
//! - Define the canonical user record and its input shape.
//! - Define the scalar view-state enums owned by the store.
//!
//! # Invariants
//! - Every record is identified by a store-assigned `RecordId`.
//! - Records are never deleted; there is no tombstone state.

pub mod record;
pub mod view_state;
