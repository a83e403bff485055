//! Volatile in-memory slot.
//!
//! # Responsibility
//! - Provide a slot implementation with no filesystem footprint for tests
//!   and embedded callers.
//!
//! # Invariants
//! - Holds the serialized JSON payload, not live `Note` values, so the slot
//!   exercises the same wire shape as the file-backed implementation.

use crate::model::note::Note;
use crate::storage::{NoteSlot, SlotResult};
use log::warn;
use std::cell::RefCell;

/// Slot backed by an in-process string cell.
#[derive(Default)]
pub struct MemorySlot {
    payload: RefCell<Option<String>>,
}

impl MemorySlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-seeded with a raw payload.
    ///
    /// Used by tests that need to simulate corrupt persisted state.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
        }
    }
}

impl NoteSlot for MemorySlot {
    fn load(&self) -> SlotResult<Vec<Note>> {
        let payload = self.payload.borrow();
        let Some(raw) = payload.as_deref() else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Note>>(raw) {
            Ok(notes) => Ok(notes),
            Err(err) => {
                warn!("event=slot_load module=storage status=corrupt backend=memory error={err}");
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, notes: &[Note]) -> SlotResult<()> {
        let serialized = serde_json::to_string(notes)?;
        *self.payload.borrow_mut() = Some(serialized);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemorySlot;
    use crate::model::note::Note;
    use crate::storage::NoteSlot;

    #[test]
    fn empty_slot_loads_as_empty() {
        let slot = MemorySlot::new();
        assert!(slot.load().expect("load").is_empty());
    }

    #[test]
    fn corrupt_payload_loads_as_empty() {
        let slot = MemorySlot::with_payload("][");
        assert!(slot.load().expect("corrupt load must stay soft").is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let slot = MemorySlot::new();
        let notes = vec![Note::new("a", "body a"), Note::new("b", "body b")];
        slot.save(&notes).expect("save");
        assert_eq!(slot.load().expect("load"), notes);
    }
}
