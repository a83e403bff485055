//! Note store use-cases.
//!
//! # Responsibility
//! - Own the in-memory note collection and its insertion order.
//! - Apply create/edit/toggle-archive mutations and persist after each one.
//!
//! # Invariants
//! - Notes with empty `text` never enter the collection.
//! - Insertion order is preserved; new notes are appended at the end.
//! - Every applied mutation is followed by a full-collection save before
//!   the call returns.
//! - No operation removes a note; archiving only changes visibility.

use crate::model::note::{Note, NoteId};
use crate::storage::{NoteSlot, SlotError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for note mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence slot failure during save.
    Slot(SlotError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slot(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Slot(err) => Some(err),
        }
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Slot(value)
    }
}

/// Authoritative owner of the note collection.
///
/// Mutations return whether anything changed, which doubles as the redraw
/// signal for the rendering collaborator. Save errors propagate to the
/// caller with the in-memory mutation retained, so a storage outage
/// degrades to an in-memory-only session rather than losing the edit.
pub struct NoteStore<S: NoteSlot> {
    slot: S,
    notes: Vec<Note>,
}

impl<S: NoteSlot> NoteStore<S> {
    /// Opens the store, loading the last-saved collection from the slot.
    ///
    /// # Contract
    /// - Absent or corrupt persisted data initializes an empty collection;
    ///   this constructor only fails on slot transport errors.
    pub fn open(slot: S) -> StoreResult<Self> {
        let notes = slot.load()?;
        info!(
            "event=store_open module=store status=ok count={}",
            notes.len()
        );
        Ok(Self { slot, notes })
    }

    /// Generates a fresh note identifier.
    ///
    /// Random v4 UUIDs keep collisions out of the expected case without any
    /// counter state tied to prior notes.
    pub fn generate_id() -> NoteId {
        Uuid::new_v4()
    }

    /// Adds a new active note to the end of the collection.
    ///
    /// # Contract
    /// - Empty `text` is a silent no-op returning `Ok(None)`; nothing is
    ///   mutated or persisted.
    /// - Otherwise returns the new note's ID; a `Some` return means the
    ///   caller should redraw.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> StoreResult<Option<NoteId>> {
        let text = text.into();
        if text.is_empty() {
            return Ok(None);
        }

        let note = Note::with_id(Self::generate_id(), title, text);
        let id = note.id;
        self.notes.push(note);
        self.persist()?;
        Ok(Some(id))
    }

    /// Overwrites the title and text of the note with the given ID.
    ///
    /// # Contract
    /// - The archive flag is untouched.
    /// - An unknown `id` is a silent no-op returning `Ok(false)`; the design
    ///   tolerates stale selection references from the UI.
    pub fn edit(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> StoreResult<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return Ok(false);
        };

        note.title = title.into();
        note.text = text.into();
        self.persist()?;
        Ok(true)
    }

    /// Flips the archive flag of the note with the given ID.
    ///
    /// # Contract
    /// - An unknown `id` performs no mutation and returns `Ok(false)`; the
    ///   miss is logged so lookup failures stay observable even though the
    ///   caller contract does not surface them.
    pub fn toggle_archive(&mut self, id: NoteId) -> StoreResult<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            warn!("event=toggle_archive module=store status=not_found id={id}");
            return Ok(false);
        };

        note.toggle_archived();
        self.persist()?;
        Ok(true)
    }

    /// Read-only snapshot of the full collection in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes in the collection, archived included.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the collection holds no notes at all.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn persist(&self) -> StoreResult<()> {
        self.slot.save(&self.notes)?;
        Ok(())
    }
}
