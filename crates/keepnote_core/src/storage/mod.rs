//! Persistence slot abstractions and implementations.
//!
//! # Responsibility
//! - Define the durable key-value slot contract the store saves through.
//! - Isolate serialization and filesystem details from store orchestration.
//!
//! # Invariants
//! - `load` never raises for absent, unreadable, or corrupt persisted data;
//!   all are treated as an empty collection.
//! - `save` replaces the full prior value; there is no delta write path.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_slot;
mod memory;

pub use json_slot::JsonFileSlot;
pub use memory::MemorySlot;

pub type SlotResult<T> = Result<T, SlotError>;

/// Generic error for slot read/write operations.
#[derive(Debug)]
pub enum SlotError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "slot i/o failure: {err}"),
            Self::Serialize(err) => write!(f, "slot serialization failure: {err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SlotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SlotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Durable slot contract consumed by the note store.
///
/// The persisted shape is a single JSON array of note objects. Implementors
/// must keep `load` soft: a missing, unreadable, or unparseable value is an
/// empty collection, never an error surfaced to the caller.
pub trait NoteSlot {
    /// Returns the last-saved collection, or empty when none exists or the
    /// stored value cannot be read or parsed.
    fn load(&self) -> SlotResult<Vec<Note>>;

    /// Durably serializes the full collection, replacing any prior value.
    fn save(&self, notes: &[Note]) -> SlotResult<()>;
}
