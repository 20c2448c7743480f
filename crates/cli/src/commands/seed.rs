//! Database seeding command.
//!
//! # Usage
//!
//! ```bash
//! vb-cli seed -p <admin-password>
//! ```
//!
//! Idempotent: the admin account is only created when missing and the
//! starter catalog only when the catalog is empty, so re-running against a
//! populated database is a no-op.
//!
//! # Environment Variables
//!
//! - `VESTIUBEM_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection
//!   string

use rust_decimal::Decimal;
use sqlx::PgPool;
use thiserror::Error;

use vestiubem_core::Email;
use vestiubem_server::db::catalog::NewClothingItem;
use vestiubem_server::db::{CatalogRepository, RepositoryError, UserRepository};
use vestiubem_server::services::{AuthError, AuthService};

/// Default admin account email.
const ADMIN_EMAIL: &str = "admin@vestiubem.com";

/// Default admin display name.
const ADMIN_NAME: &str = "Administrador";

/// Errors that can occur during seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Account creation error.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] vestiubem_core::EmailError),

    /// Repository error.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// The starter catalog shipped with a fresh deployment.
fn default_items() -> Vec<NewClothingItem> {
    vec![
        NewClothingItem {
            name: "Vestido Floral Verão".to_string(),
            description: Some("Leve e solto".to_string()),
            image_url: "https://img.ltwebstatic.com/images3_pi/2023/04/24/1682316086f685714364007874944d156555132a2c_thumbnail_600x.webp".to_string(),
            price: Decimal::new(8990, 2),
            shein_link: "#".to_string(),
        },
        NewClothingItem {
            name: "Blazer Casual Rosa".to_string(),
            description: Some("Elegância para o trabalho".to_string()),
            image_url: "https://img.ltwebstatic.com/images3_pi/2022/09/26/166415764028682705224e70195576722238426993_thumbnail_600x.webp".to_string(),
            price: Decimal::new(12990, 2),
            shein_link: "#".to_string(),
        },
        NewClothingItem {
            name: "Conjunto Top e Saia".to_string(),
            description: Some("Perfeito para festas".to_string()),
            image_url: "https://img.ltwebstatic.com/images3_pi/2021/12/20/16399677054f169992f584e030e463a03287661074_thumbnail_600x.webp".to_string(),
            price: Decimal::new(15990, 2),
            shein_link: "#".to_string(),
        },
    ]
}

/// Seed the default admin user and starter catalog items.
///
/// # Errors
///
/// Returns `SeedError` if the database is unreachable or an insert fails.
pub async fn run(admin_password: &str) -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url =
        super::database_url().ok_or(SeedError::MissingEnvVar("VESTIUBEM_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    seed_admin(&pool, admin_password).await?;
    seed_catalog(&pool).await?;

    tracing::info!("Seeding complete!");
    Ok(())
}

/// Create the admin account if it doesn't exist, then ensure it holds the
/// admin role.
async fn seed_admin(pool: &PgPool, password: &str) -> Result<(), SeedError> {
    let auth = AuthService::new(pool);

    match auth.register(ADMIN_NAME, ADMIN_EMAIL, password).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Admin account created");
        }
        Err(AuthError::UserAlreadyExists) => {
            tracing::info!("Admin account already exists, skipping");
        }
        Err(e) => return Err(SeedError::Auth(e)),
    }

    // Email is a compile-time constant, parse can't fail at runtime but the
    // error is propagated anyway.
    let email = Email::parse(ADMIN_EMAIL)?;

    UserRepository::new(pool).promote_to_admin(&email).await?;

    Ok(())
}

/// Insert the starter catalog when the catalog is empty.
async fn seed_catalog(pool: &PgPool) -> Result<(), SeedError> {
    let catalog = CatalogRepository::new(pool);

    if catalog.count().await? > 0 {
        tracing::info!("Catalog not empty, skipping starter items");
        return Ok(());
    }

    for item in default_items() {
        let created = catalog.create(&item).await?;
        tracing::info!(
            item_id = %created.id,
            name = %created.name,
            price = %created.display_price(),
            "Catalog item seeded"
        );
    }

    Ok(())
}
