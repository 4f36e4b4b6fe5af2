//! Owner-resolution extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use carnet_core::types::OwnerId;

use crate::auth::jwt::validate_token;
use crate::error::ApiError;
use crate::state::AppState;

/// The requesting owner, resolved from a JWT Bearer token in the
/// `Authorization` header.
///
/// Every failure mode -- missing header, malformed header, invalid or
/// expired token -- rejects with 404, not 401: the browsing surface does not
/// reveal whether an owner exists.
#[derive(Debug, Clone, Copy)]
pub struct Owner {
    /// The owner's opaque identifier (from `claims.sub`).
    pub id: OwnerId,
}

impl FromRequestParts<AppState> for Owner {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::OwnerNotFound)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::OwnerNotFound)?;

        let claims = validate_token(token, &state.config.jwt).map_err(|err| {
            tracing::debug!(error = %err, "Owner token rejected");
            ApiError::OwnerNotFound
        })?;

        Ok(Owner { id: claims.sub })
    }
}
