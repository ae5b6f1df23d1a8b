//! Relay helpers for backend responses.
//!
//! The gateway never interprets backend payloads; it relays status and body.
//! Non-success bodies that are not valid JSON are replaced by a fixed
//! sentinel so the browser always receives a structured error object.

use axum::Json;
use axum::http::{StatusCode, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::models::ErrorResponse;

/// Sentinel substituted when an upstream error body is not valid JSON.
fn upstream_sentinel() -> ErrorResponse {
    ErrorResponse {
        error: "upstream_error".to_string(),
        message: "Upstream returned a non-JSON response".to_string(),
    }
}

fn relay_status(upstream: &reqwest::Response) -> StatusCode {
    StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Relay an upstream response verbatim: raw body passthrough on success,
/// best-effort JSON on non-success.
pub async fn relay(upstream: reqwest::Response) -> Response {
    let status = relay_status(&upstream);
    if !status.is_success() {
        return relay_error(upstream).await;
    }

    let content_type = upstream
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();
    let body = upstream.bytes().await.unwrap_or_default();

    (status, [(CONTENT_TYPE, content_type)], body).into_response()
}

/// Relay a non-success upstream response, substituting the sentinel error
/// object when the body is not valid JSON.
pub async fn relay_error(upstream: reqwest::Response) -> Response {
    let status = relay_status(&upstream);
    let body = upstream.bytes().await.unwrap_or_default();

    match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(json) => (status, Json(json)).into_response(),
        Err(_) => {
            debug!(status = %status, "upstream error body was not JSON, substituting sentinel");
            (status, Json(upstream_sentinel())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream_response(status: u16, content_type: &str, body: &'static str) -> reqwest::Response {
        axum::http::Response::builder()
            .status(status)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .unwrap()
            .into()
    }

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_body_passes_through_unchanged() {
        let resp = relay(upstream_response(200, "application/json", r#"{"hits":[]}"#)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, serde_json::json!({"hits": []}));
    }

    #[tokio::test]
    async fn json_error_body_is_relayed() {
        let resp = relay(upstream_response(422, "application/json", r#"{"detail":"bad query"}"#))
            .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(resp).await, serde_json::json!({"detail": "bad query"}));
    }

    #[tokio::test]
    async fn non_json_error_body_becomes_sentinel() {
        let resp = relay(upstream_response(500, "text/html", "<h1>oops</h1>")).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["error"], "upstream_error");
        assert_eq!(json["message"], "Upstream returned a non-JSON response");
    }
}
