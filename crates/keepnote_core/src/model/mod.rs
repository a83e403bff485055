//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one note shape shared by the active and archived projections.
//!
//! # Invariants
//! - Every domain object is identified by a stable `NoteId`.
//! - Archiving is a visibility flag, not a deletion mechanism; no note is
//!   ever removed from the collection.

pub mod note;
