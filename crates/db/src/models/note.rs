//! Note model.

use serde::Serialize;
use sqlx::FromRow;

use carnet_core::selection::Selectable;
use carnet_core::types::{NoteId, OwnerId, Timestamp};

/// A row from the `notes` table.
///
/// Notes are created, mutated, and deleted by the authoring service; here
/// they are read-only.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub owner_id: OwnerId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Selectable for Note {
    fn note_id(&self) -> NoteId {
        self.id
    }
}
