//! Generated-image repository.
//!
//! Rows here are insert-only: a record is created after a successful try-on
//! and never mutated. The only deletion path is the cascade from deleting
//! the owning user.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use vestiubem_core::{GeneratedImageId, UserId};

use super::RepositoryError;
use crate::models::GeneratedImage;

/// Raw `generated_images` row.
#[derive(sqlx::FromRow)]
struct GeneratedImageRow {
    id: i64,
    user_id: i64,
    original_user_image: String,
    clothing_image: String,
    result_image: String,
    clothing_name: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<GeneratedImageRow> for GeneratedImage {
    fn from(row: GeneratedImageRow) -> Self {
        Self {
            id: GeneratedImageId::new(row.id),
            user_id: UserId::new(row.user_id),
            original_user_image: row.original_user_image,
            clothing_image: row.clothing_image,
            result_image: row.result_image,
            clothing_name: row.clothing_name,
            created_at: row.created_at,
        }
    }
}

/// Fields for recording one try-on result.
#[derive(Debug, Clone)]
pub struct NewGeneratedImage {
    pub user_id: UserId,
    pub original_user_image: String,
    pub clothing_image: String,
    pub result_image: String,
    pub clothing_name: Option<String>,
}

/// Repository for generated-image database operations.
pub struct GenerationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GenerationRepository<'a> {
    /// Create a new generation repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List one user's generated images, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<GeneratedImage>, RepositoryError> {
        let rows = sqlx::query_as::<_, GeneratedImageRow>(
            r"
            SELECT id, user_id, original_user_image, clothing_image,
                   result_image, clothing_name, created_at
            FROM generated_images
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(GeneratedImage::from).collect())
    }

    /// Record a try-on result.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        image: &NewGeneratedImage,
    ) -> Result<GeneratedImage, RepositoryError> {
        let row = sqlx::query_as::<_, GeneratedImageRow>(
            r"
            INSERT INTO generated_images
                (user_id, original_user_image, clothing_image, result_image, clothing_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, original_user_image, clothing_image,
                      result_image, clothing_name, created_at
            ",
        )
        .bind(image.user_id.as_i64())
        .bind(&image.original_user_image)
        .bind(&image.clothing_image)
        .bind(&image.result_image)
        .bind(&image.clothing_name)
        .fetch_one(self.pool)
        .await?;

        Ok(GeneratedImage::from(row))
    }
}
