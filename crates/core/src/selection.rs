//! Client-side selection projection.
//!
//! "Currently selected note" is never independent state: it is recomputed
//! from the current note set plus a remembered id. When the set is replaced
//! (page change, new search) the selection resets; when the remembered id is
//! simply absent from the set, the projection quietly yields nothing.

use crate::types::NoteId;

/// Anything with a note id that can participate in the selection projection.
pub trait Selectable {
    fn note_id(&self) -> NoteId;
}

/// The remembered selection id, independent of any particular note set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_id: Option<NoteId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `id` as selected. Re-selecting the already-selected row is a
    /// no-op rather than a toggle; use [`SelectionState::clear`] to deselect.
    pub fn select(&mut self, id: NoteId) {
        self.selected_id = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected_id
    }

    /// Project the selection onto a note set. An id with no matching note
    /// (e.g. it fell off the current page) yields `None`.
    pub fn selected<'a, T: Selectable>(&self, notes: &'a [T]) -> Option<&'a T> {
        let id = self.selected_id?;
        notes.iter().find(|n| n.note_id() == id)
    }
}

/// A note set paired with its selection.
///
/// Replacing the set resets the selection, so a stale id can never appear
/// selected against notes it was not chosen from.
#[derive(Debug, Clone, Default)]
pub struct NoteListView<T> {
    notes: Vec<T>,
    selection: SelectionState,
}

impl<T: Selectable> NoteListView<T> {
    pub fn new(notes: Vec<T>) -> Self {
        Self {
            notes,
            selection: SelectionState::new(),
        }
    }

    pub fn notes(&self) -> &[T] {
        &self.notes
    }

    /// Swap in a new note set (page change, fresh search) and clear the
    /// selection.
    pub fn replace_notes(&mut self, notes: Vec<T>) {
        self.notes = notes;
        self.selection.clear();
    }

    pub fn select(&mut self, id: NoteId) {
        self.selection.select(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selected_note(&self) -> Option<&T> {
        self.selection.selected(&self.notes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
