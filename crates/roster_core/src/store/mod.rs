//! Canonical roster state and change notification.
//!
//! # Responsibility
//! - Own the record list and the filter/edit view state.
//! - Publish one `StoreChange` per effective mutation to subscribers.
//!
//! # Invariants
//! - State is mutated only through `RecordStore` operations.
//! - No-op operations publish nothing.

pub mod record_store;
pub mod snapshot;
