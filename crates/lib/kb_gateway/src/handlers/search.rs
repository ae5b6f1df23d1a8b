//! Search handler — authenticated pass-through to the backend hybrid search.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use crate::AppState;
use crate::error::{GatewayError, GatewayResult};
use crate::services::cookies;
use crate::services::upstream;

/// Backend hybrid-search endpoint path.
const SEARCH_PATH: &str = "/api/v1/hybrid-search";

/// `POST /search` — forward an authenticated query to the backend.
///
/// The gateway performs no interpretation of search results; the upstream
/// status and payload are relayed as-is.
pub async fn search_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> GatewayResult<Response> {
    let token = jar
        .get(cookies::ACCESS_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(GatewayError::NotAuthenticated)?;

    let query: serde_json::Value =
        serde_json::from_slice(&body).map_err(|_| GatewayError::InvalidRequest)?;

    let upstream = state
        .http
        .post(state.config.backend_endpoint(SEARCH_PATH))
        .bearer_auth(&token)
        .json(&query)
        .send()
        .await
        .map_err(|e| {
            warn!("search request to backend failed: {e}");
            GatewayError::SearchUnavailable
        })?;

    Ok(upstream::relay(upstream).await)
}
