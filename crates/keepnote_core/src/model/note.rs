//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted unit of user content (title, text, archive flag).
//! - Provide lifecycle helpers for the archive toggle.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `archived` is the source of truth for active/archived visibility.
//! - A note with empty `text` must not enter the store; callers enforce this
//!   before construction reaches persistence.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every note in the collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Serializes as the canonical UUID string on the wire.
pub type NoteId = Uuid;

/// Canonical domain record for a single note.
///
/// The archive flag partitions the collection into active and archived
/// views; there is no separate archived store and no hard delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for edit targeting and slot round-trips.
    pub id: NoteId,
    /// Free-form title, may be empty.
    pub title: String,
    /// Free-form body. Non-empty for every note that exists in the store.
    pub text: String,
    /// Visibility partition key. `false` means active.
    pub archived: bool,
}

impl Note {
    /// Creates a new active note with a generated stable ID.
    ///
    /// # Invariants
    /// - `archived` starts as `false`.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, text)
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used by the store's add path, which generates the identity before
    /// construction.
    ///
    /// # Invariants
    /// - The provided `id` must remain stable for this note's lifetime.
    pub fn with_id(id: NoteId, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            archived: false,
        }
    }

    /// Flips the archive flag in place.
    pub fn toggle_archived(&mut self) {
        self.archived = !self.archived;
    }

    /// Returns whether this note belongs to the active (non-archived) view.
    pub fn is_active(&self) -> bool {
        !self.archived
    }
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn new_note_starts_active_with_unique_id() {
        let a = Note::new("a", "body a");
        let b = Note::new("b", "body b");
        assert!(!a.archived);
        assert!(a.is_active());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn toggle_archived_is_an_involution() {
        let mut note = Note::new("title", "body");
        let original = note.archived;
        note.toggle_archived();
        assert_ne!(note.archived, original);
        note.toggle_archived();
        assert_eq!(note.archived, original);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let note = Note::new("Groceries", "Milk, eggs");
        let value = serde_json::to_value(&note).expect("note should serialize");
        assert_eq!(value["id"], note.id.to_string());
        assert_eq!(value["title"], "Groceries");
        assert_eq!(value["text"], "Milk, eggs");
        assert_eq!(value["archived"], false);
    }
}
