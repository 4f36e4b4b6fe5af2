pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notes              paginated listing (?page)
/// /notes/search       free-text search (?search)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/notes", notes::notes_router())
}
