//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `keepnote_core` linkage.
//! - Walk one in-memory note session end to end for quick local sanity
//!   checks, rendering through the `NoteRenderer` boundary.

use keepnote_core::{project, MemorySlot, Note, NoteRenderer, NoteStore, StoreResult};

struct PlainRenderer;

impl NoteRenderer for PlainRenderer {
    fn redraw(&mut self, notes: &[&Note]) {
        if notes.is_empty() {
            println!("  (no notes)");
            return;
        }
        for note in notes {
            let marker = if note.archived { "A" } else { " " };
            println!("  [{marker}] {} | {}", note.title, note.text);
        }
    }
}

fn run_session() -> StoreResult<()> {
    let mut store = NoteStore::open(MemorySlot::new())?;
    let mut renderer = PlainRenderer;

    let groceries = store.add("Groceries", "Milk, eggs")?;
    store.add("Ideas", "Note widget smoke run")?;
    store.add("", "")?;

    println!("active notes:");
    renderer.redraw(&project(store.notes(), false));

    if let Some(id) = groceries {
        store.toggle_archive(id)?;
    }

    println!("archived notes:");
    renderer.redraw(&project(store.notes(), true));
    Ok(())
}

fn main() {
    println!("keepnote_core ping={}", keepnote_core::ping());
    println!("keepnote_core version={}", keepnote_core::core_version());

    if let Err(err) = run_session() {
        eprintln!("smoke session failed: {err}");
        std::process::exit(1);
    }
}
