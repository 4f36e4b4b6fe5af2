//! Handlers for note browsing: paginated listing and free-text search.
//!
//! Each request is terminal in one cycle: resolve the owner, fetch, and
//! respond. Repository failures are fatal for the request (no retries, no
//! partial results); a page reload is the caller's retry.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use carnet_core::pagination::{page_offset, parse_page, total_pages, PAGE_SIZE};
use carnet_core::types::OwnerId;
use carnet_core::validate::{validate_search_rows, SearchNote};
use carnet_db::models::note::Note;
use carnet_db::repositories::NoteRepo;

use crate::error::ApiResult;
use crate::middleware::auth::Owner;
use crate::state::AppState;

/// Listing path the empty-term search redirects to.
const NOTES_PATH: &str = "/api/v1/notes";

/// Generic degraded-search indicator. The real validation diagnostic is
/// logged server-side and never sent to the caller.
const SEARCH_DEGRADED_MSG: &str = "Search results could not be loaded";

// ---------------------------------------------------------------------------
// Query parameter and response types
// ---------------------------------------------------------------------------

/// Query parameters for the listing endpoint.
///
/// `page` is a raw string so non-numeric input clamps to page 1 instead of
/// failing query deserialization.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}

/// Response payload for the listing endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListResponse {
    pub notes: Vec<Note>,
    pub page: i64,
    pub total_pages: i64,
}

/// Response payload for the search endpoint, tagged by `status`.
///
/// There is no partial-success shape: either the whole validated batch or
/// an error.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchResponse {
    Idle { notes: Vec<SearchNote> },
    Error { error: String },
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /notes?page=
///
/// One page of the owner's notes plus the page count. A page past the end
/// returns an empty `notes` array, not an error.
pub async fn list_notes(
    owner: Owner,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<NoteListResponse>> {
    let page = parse_page(params.page.as_deref());
    let offset = page_offset(page, PAGE_SIZE);

    // Independent reads; drift between them is acceptable staleness.
    let (notes, total) = tokio::try_join!(
        NoteRepo::list_by_owner(&state.pool, owner.id, offset, PAGE_SIZE),
        NoteRepo::count_by_owner(&state.pool, owner.id),
    )?;

    let total_pages = total_pages(total, PAGE_SIZE);
    tracing::debug!(owner_id = %owner.id, page, total_pages, "Listed notes");

    Ok(Json(NoteListResponse {
        notes,
        page,
        total_pages,
    }))
}

/// GET /notes/search?search=
///
/// Free-text substring search over the owner's note titles and contents,
/// capped at 50 results. An empty term redirects to the plain listing.
/// Raw rows that fail shape validation degrade the whole response to a 400
/// with a generic message.
pub async fn search_notes(
    owner: Owner,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Response> {
    if params.search.is_empty() {
        return Ok(Redirect::to(NOTES_PATH).into_response());
    }

    let rows = NoteRepo::search(&state.pool, owner.id, &params.search).await?;

    let (status, body) = search_outcome(owner.id, params.search.len(), rows);
    Ok((status, Json(body)).into_response())
}

/// Run the raw rows through the validation barrier and pick the response.
///
/// A failed batch degrades to a 400 carrying only the generic message; the
/// serde diagnostic goes to the log.
fn search_outcome(
    owner_id: OwnerId,
    term_len: usize,
    rows: Vec<serde_json::Value>,
) -> (StatusCode, SearchResponse) {
    match validate_search_rows(rows) {
        Ok(notes) => {
            tracing::debug!(
                owner_id = %owner_id,
                term_len,
                hits = notes.len(),
                "Search completed"
            );
            (StatusCode::OK, SearchResponse::Idle { notes })
        }
        Err(err) => {
            tracing::error!(owner_id = %owner_id, error = %err, "Search result validation failed");
            (
                StatusCode::BAD_REQUEST,
                SearchResponse::Error {
                    error: SEARCH_DEGRADED_MSG.to_string(),
                },
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
