//! Note view projection.
//!
//! # Responsibility
//! - Filter the collection into the active or archived view.
//! - Keep rendering decoupled from the store through `NoteRenderer`.
//!
//! # Invariants
//! - Projection preserves insertion order within the filtered subset.
//! - `project(notes, false)` and `project(notes, true)` partition the
//!   collection exactly; every note appears in exactly one of them.

use crate::model::note::Note;

/// Returns the notes to display for the requested view.
///
/// Pure and deterministic: repeated calls with the same inputs yield the
/// same output. This is the sole mechanism distinguishing the active view
/// from the archived one; there is no separate archived store.
pub fn project(notes: &[Note], show_archived: bool) -> Vec<&Note> {
    notes
        .iter()
        .filter(|note| note.archived == show_archived)
        .collect()
}

/// Rendering collaborator boundary.
///
/// The store side hands a projection result to `redraw` after every applied
/// mutation or view switch; implementations produce visual output and own
/// no note state of their own.
pub trait NoteRenderer {
    fn redraw(&mut self, notes: &[&Note]);
}

#[cfg(test)]
mod tests {
    use super::project;
    use crate::model::note::Note;

    fn sample() -> Vec<Note> {
        let mut notes = vec![
            Note::new("a", "body a"),
            Note::new("b", "body b"),
            Note::new("c", "body c"),
        ];
        notes[1].archived = true;
        notes
    }

    #[test]
    fn active_and_archived_views_partition_the_collection() {
        let notes = sample();
        let active = project(&notes, false);
        let archived = project(&notes, true);

        assert_eq!(active.len() + archived.len(), notes.len());
        for note in &notes {
            let in_active = active.iter().any(|n| n.id == note.id);
            let in_archived = archived.iter().any(|n| n.id == note.id);
            assert!(in_active != in_archived);
        }
    }

    #[test]
    fn projection_preserves_insertion_order() {
        let notes = sample();
        let active = project(&notes, false);
        assert_eq!(active[0].id, notes[0].id);
        assert_eq!(active[1].id, notes[2].id);
    }

    #[test]
    fn projection_is_deterministic() {
        let notes = sample();
        assert_eq!(project(&notes, true), project(&notes, true));
    }
}
