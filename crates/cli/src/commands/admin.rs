//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! # Promote an existing user to administrator
//! vb-cli admin promote -e admin@vestiubem.com
//! ```
//!
//! Role escalation is deliberately CLI-only; the HTTP API never changes
//! roles.
//!
//! # Environment Variables
//!
//! - `VESTIUBEM_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection
//!   string

use sqlx::PgPool;
use thiserror::Error;

use vestiubem_core::Email;
use vestiubem_server::db::{RepositoryError, UserRepository};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] vestiubem_core::EmailError),

    /// No user registered with that email.
    #[error("No user found with email: {0}")]
    UserNotFound(String),

    /// Repository error.
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

/// Promote an existing user to administrator.
///
/// # Errors
///
/// Returns `AdminError::UserNotFound` if no account has that email.
pub async fn promote(email: &str) -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let email = Email::parse(email)?;

    let database_url =
        super::database_url().ok_or(AdminError::MissingEnvVar("VESTIUBEM_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    UserRepository::new(&pool)
        .promote_to_admin(&email)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AdminError::UserNotFound(email.to_string()),
            other => AdminError::Repository(other),
        })?;

    tracing::info!("User {} is now an administrator", email);
    Ok(())
}
