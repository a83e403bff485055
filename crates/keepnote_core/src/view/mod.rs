//! Display-facing read layer.
//!
//! # Responsibility
//! - Derive the filtered, ordered note sequence the UI renders.
//! - Define the collaborator boundary rendering code implements.
//!
//! # Invariants
//! - Projection is pure; it never mutates the collection it reads.

pub mod projection;
