//! File-backed JSON slot.
//!
//! # Responsibility
//! - Persist the full note collection as one JSON array in a named file.
//! - Keep load soft against missing or corrupt on-disk state.
//!
//! # Invariants
//! - Saves go through a temp-file-then-rename so a failed write never
//!   truncates the previously saved value.
//! - Corrupt or unreadable persisted data is treated as absent, not as a
//!   load error; only `save` surfaces hard failures.

use crate::model::note::Note;
use crate::storage::{NoteSlot, SlotResult};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Slot backed by a single JSON file.
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    /// Creates a slot for the given file path.
    ///
    /// The file does not need to exist yet; a missing file loads as an
    /// empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the slot's backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl NoteSlot for JsonFileSlot {
    fn load(&self) -> SlotResult<Vec<Note>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                warn!(
                    "event=slot_load module=storage status=unreadable path={} error={err}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => Ok(notes),
            Err(err) => {
                warn!(
                    "event=slot_load module=storage status=corrupt path={} error={err}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, notes: &[Note]) -> SlotResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = serde_json::to_string(notes)?;
        let temp = self.temp_path();
        fs::write(&temp, serialized)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
