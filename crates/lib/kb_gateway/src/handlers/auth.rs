//! Session handlers — login, logout, session check.
//!
//! Login exchanges credentials for a backend token pair and transcribes it
//! into the httpOnly cookie pair. Logout is purely local cookie invalidation.
//! The session check forwards the access cookie as a bearer token and clears
//! cookies only when the backend confirms the session is invalid.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use crate::AppState;
use crate::error::{GatewayError, GatewayResult};
use crate::models::{BackendTokens, LoginResponse, LogoutResponse};
use crate::services::cookies;
use crate::services::upstream;

/// Backend login endpoint path.
const LOGIN_PATH: &str = "/api/v1/auth/login";
/// Backend current-user endpoint path.
const ME_PATH: &str = "/api/v1/auth/me";

/// Field under which the session check echoes the access token back to the
/// browser script. The cookie itself is httpOnly, so this is the only way
/// the in-page copy can be repopulated after a reload.
const TOKEN_ECHO_FIELD: &str = "_token";

/// `POST /login` — exchange credentials for tokens, set the cookie pair.
///
/// The body is forwarded opaquely; only the backend interprets it. On
/// success the refresh token goes into a cookie and is never echoed in the
/// response body.
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> GatewayResult<Response> {
    let credentials: serde_json::Value =
        serde_json::from_slice(&body).map_err(|_| GatewayError::InvalidRequest)?;

    let upstream = state
        .http
        .post(state.config.backend_endpoint(LOGIN_PATH))
        .json(&credentials)
        .send()
        .await
        .map_err(|e| {
            warn!("login request to backend failed: {e}");
            GatewayError::BackendUnreachable
        })?;

    if !upstream.status().is_success() {
        return Ok(upstream::relay_error(upstream).await);
    }

    let tokens: BackendTokens = upstream.json().await.map_err(|e| {
        warn!("backend login response was not a token pair: {e}");
        GatewayError::BackendUnreachable
    })?;

    let secure = state.config.production;
    let jar = jar
        .add(cookies::access_cookie(&tokens.access_token, secure))
        .add(cookies::refresh_cookie(&tokens.refresh_token, secure));

    let body = LoginResponse {
        token_type: tokens.token_type,
        access_token: tokens.access_token,
    };
    Ok((jar, Json(body)).into_response())
}

/// `POST /logout` — clear both session cookies. No upstream call; idempotent
/// and infallible.
pub async fn logout_handler(State(state): State<AppState>, jar: CookieJar) -> Response {
    let secure = state.config.production;
    let jar = jar
        .add(cookies::clear_access_cookie(secure))
        .add(cookies::clear_refresh_cookie(secure));

    (jar, Json(LogoutResponse { success: true })).into_response()
}

/// `GET /me` — validate the current session against the backend.
///
/// Upstream 401/403 means the session is confirmed invalid: both cookies are
/// cleared so no stale state lingers. Any other upstream failure (including
/// network errors) leaves the cookies untouched — a transient outage must
/// not log the user out.
pub async fn me_handler(State(state): State<AppState>, jar: CookieJar) -> GatewayResult<Response> {
    let token = jar
        .get(cookies::ACCESS_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(GatewayError::NotAuthenticated)?;

    let upstream = state
        .http
        .get(state.config.backend_endpoint(ME_PATH))
        .bearer_auth(&token)
        .send()
        .await
        .map_err(|e| {
            warn!("session check against backend failed: {e}");
            GatewayError::BackendUnreachable
        })?;

    let status = upstream.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        let secure = state.config.production;
        let jar = jar
            .add(cookies::clear_access_cookie(secure))
            .add(cookies::clear_refresh_cookie(secure));
        return Ok((jar, upstream::relay_error(upstream).await).into_response());
    }
    if !status.is_success() {
        return Ok(upstream::relay_error(upstream).await);
    }

    let mut user: serde_json::Value = upstream.json().await.map_err(|e| {
        warn!("backend user response was not JSON: {e}");
        GatewayError::BackendUnreachable
    })?;
    let Some(obj) = user.as_object_mut() else {
        warn!("backend user response was not a JSON object");
        return Err(GatewayError::BackendUnreachable);
    };
    obj.insert(TOKEN_ECHO_FIELD.to_string(), serde_json::json!(token));

    Ok(Json(user).into_response())
}
