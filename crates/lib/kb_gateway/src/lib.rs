//! # kb_gateway
//!
//! Session proxy gateway for the knowledge-base UI.
//!
//! Browser-facing it speaks an HttpOnly-cookie session model; backend-facing
//! it speaks bearer tokens. Four proxied operations (login, logout, session
//! check, hybrid search) plus a local liveness endpoint.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::config::GatewayConfig;
use crate::handlers::{auth, health, search};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration, constructed once at process start.
    pub config: GatewayConfig,
    /// Shared HTTP client for outbound backend calls (connection pooling).
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(health::healthz_handler))
        .route("/login", post(auth::login_handler))
        .route("/logout", post(auth::logout_handler))
        .route("/me", get(auth::me_handler))
        .route("/search", post(search::search_handler))
        .layer(cors)
        .with_state(state)
}
