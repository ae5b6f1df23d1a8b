//! Request/response bodies for the gateway's own surface.
//!
//! Inbound credentials and search queries are deliberately untyped
//! (`serde_json::Value`): the gateway forwards them opaquely and only the
//! backend interprets them.

use serde::{Deserialize, Serialize};

/// Token pair returned by the backend login endpoint.
#[derive(Debug, Deserialize)]
pub struct BackendTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Body returned to the browser on login success. The refresh token is
/// cookie-only and never appears here.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token_type: String,
    pub access_token: String,
}

/// Body returned by logout.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// JSON error body shared by all gateway-produced failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Body returned by the liveness endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
