//! Runtime type barrier for raw search results.
//!
//! The raw search path returns loosely-typed JSON rows. Nothing downstream
//! is allowed to trust their shape until every row has passed through
//! [`validate_search_rows`]. Validation is all-or-nothing: a single bad row
//! discards the whole batch.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::selection::Selectable;
use crate::types::NoteId;

/// The validated shape of one search hit. All three fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchNote {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

impl Selectable for SearchNote {
    fn note_id(&self) -> NoteId {
        self.id
    }
}

/// Check every raw row against the [`SearchNote`] shape.
///
/// On success the rows come back typed, in their original order. On the
/// first mismatch the whole batch is rejected with a diagnostic naming the
/// offending row; callers log that diagnostic and surface a generic message.
pub fn validate_search_rows(
    rows: Vec<serde_json::Value>,
) -> Result<Vec<SearchNote>, CoreError> {
    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| {
            serde_json::from_value::<SearchNote>(row)
                .map_err(|e| CoreError::Validation(format!("search result row {idx}: {e}")))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
