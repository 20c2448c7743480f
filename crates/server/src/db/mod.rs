//! Database operations for the VestiuBem `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `users` - Account identity and role
//! - `user_passwords` - Argon2id password hashes (1:1 with users)
//! - `clothing_items` - Admin-managed catalog
//! - `generated_images` - Try-on results, owned by the requesting user
//! - `user_favorites` - User/catalog-item join
//! - `sessions` - Tower-sessions storage
//!
//! All queries are runtime-checked (`sqlx::query_as` with `FromRow` row
//! types) so the workspace builds without a live database; rows are converted
//! into validated domain types at the repository boundary.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p vestiubem-cli -- migrate
//! ```

pub mod catalog;
pub mod favorites;
pub mod generations;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use catalog::CatalogRepository;
pub use favorites::FavoriteRepository;
pub use generations::GenerationRepository;
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
