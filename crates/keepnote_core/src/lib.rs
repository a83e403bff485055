//! Core domain logic for KeepNote.
//! This crate is the single source of truth for note lifecycle invariants.

pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use storage::{JsonFileSlot, MemorySlot, NoteSlot, SlotError, SlotResult};
pub use store::note_store::{NoteStore, StoreError, StoreResult};
pub use view::projection::{project, NoteRenderer};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
