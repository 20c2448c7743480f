//! VestiuBem server library.
//!
//! The virtual try-on backend: JSON API for accounts, catalog, favorites,
//! and the gallery, plus the `/tryon` proxy to Vertex AI image generation.
//! Exposed as a library so the CLI and integration tests can reuse the
//! configuration, repositories, and router builders.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod vertex;

use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the complete application router (without the session layer, which
/// needs a live pool and is attached by the binary).
///
/// Request tracing is layered here so every route, including the health
/// probes, gets per-request spans.
#[must_use]
pub fn app_router() -> Router<AppState> {
    Router::new()
        .merge(routes::health_routes())
        .nest("/api", routes::api_routes())
        .merge(routes::tryon_routes())
        .layer(TraceLayer::new_for_http())
}
