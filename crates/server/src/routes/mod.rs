//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check (DB ping)
//!
//! # Auth
//! POST /api/auth/register           - Create an account
//! POST /api/auth/login              - Open a session
//! POST /api/auth/logout             - Drop the session
//! GET  /api/auth/me                 - Current user record
//!
//! # Catalog
//! GET    /api/catalog               - List items (public)
//! POST   /api/catalog               - Create item (admin)
//! PUT    /api/catalog/{id}          - Update item (admin)
//! DELETE /api/catalog/{id}          - Delete item (admin)
//!
//! # Favorites (auth)
//! GET  /api/favorites               - Caller's favorites
//! POST /api/favorites/{id}/toggle   - Toggle, returns updated list
//!
//! # Gallery (auth)
//! GET  /api/generations             - Caller's generated images
//! POST /api/generations             - Record a try-on result
//!
//! # Admin
//! GET    /api/admin/users           - List users
//! DELETE /api/admin/users/{id}      - Delete a user (cascades)
//!
//! # Try-on proxy (stateless, permissive CORS)
//! POST /tryon                       - Generate a try-on image
//! ```

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod favorites;
pub mod gallery;
pub mod health;
pub mod tryon;

use axum::http::Method;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Create the health check routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
}

/// Create the `/api` routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::me))
        .route("/catalog", get(catalog::list).post(catalog::create))
        .route("/catalog/{id}", put(catalog::update).delete(catalog::delete))
        .route("/favorites", get(favorites::list))
        .route("/favorites/{id}/toggle", post(favorites::toggle))
        .route("/generations", get(gallery::list).post(gallery::create))
        .route("/admin/users", get(admin::list_users))
        .route("/admin/users/{id}", delete(admin::delete_user))
}

/// Create the try-on proxy router with its permissive CORS policy.
///
/// The proxy predates the rest of the API and is called cross-origin, so
/// preflight requests are answered for any origin; `OPTIONS` never reaches
/// the handler.
pub fn tryon_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/tryon", post(tryon::generate))
        .layer(cors)
}
