//! Gateway error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failures the gateway itself produces, with HTTP status mapping.
///
/// Upstream non-success statuses are not represented here: those are relayed
/// verbatim by [`crate::services::upstream::relay`].
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Inbound body was not valid JSON.
    #[error("Invalid request body")]
    InvalidRequest,

    /// No `access_token` cookie on a request that requires a session.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Network-level failure reaching the backend.
    #[error("Backend unreachable")]
    BackendUnreachable,

    /// Network-level failure reaching the backend during a search, with a
    /// distinct user-facing message.
    #[error("Search service unavailable. Please try again later.")]
    SearchUnavailable,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            GatewayError::InvalidRequest => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::NotAuthenticated => (StatusCode::UNAUTHORIZED, "not_authenticated"),
            GatewayError::BackendUnreachable => (StatusCode::BAD_GATEWAY, "backend_unreachable"),
            GatewayError::SearchUnavailable => (StatusCode::BAD_GATEWAY, "search_unavailable"),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
