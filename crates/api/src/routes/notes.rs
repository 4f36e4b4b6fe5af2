//! Route definitions for note browsing.
//!
//! Mounted at `/notes` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET /           -> list_notes (?page)
/// GET /search     -> search_notes (?search)
/// ```
pub fn notes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes))
        .route("/search", get(notes::search_notes))
}
