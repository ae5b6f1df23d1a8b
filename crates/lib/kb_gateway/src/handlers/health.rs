//! Liveness endpoint.

use axum::Json;

use crate::models::HealthResponse;

/// `GET /healthz` — local liveness check. Makes no upstream call.
pub async fn healthz_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
