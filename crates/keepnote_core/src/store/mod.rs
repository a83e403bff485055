//! Store layer owning the authoritative note collection.
//!
//! # Responsibility
//! - Provide the mutation entry points callers use (add/edit/toggle).
//! - Guarantee every applied mutation is immediately persisted.
//!
//! # Invariants
//! - The store is the sole writer of persisted state.
//! - Store APIs never panic on lookup misses or rejected input.

pub mod note_store;
