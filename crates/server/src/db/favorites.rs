//! Favorite repository: the user/catalog-item join.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use vestiubem_core::{ClothingItemId, UserId};

use super::RepositoryError;
use crate::models::ClothingItem;

/// Repository for favorite database operations.
pub struct FavoriteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FavoriteRepository<'a> {
    /// Create a new favorite repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's favorited catalog items, newest favorite first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ClothingItem>, RepositoryError> {
        #[derive(sqlx::FromRow)]
        struct FavoriteItemRow {
            id: i64,
            name: String,
            description: Option<String>,
            image_url: String,
            price: Decimal,
            shein_link: String,
            created_at: DateTime<Utc>,
        }

        let rows = sqlx::query_as::<_, FavoriteItemRow>(
            r"
            SELECT c.id, c.name, c.description, c.image_url, c.price,
                   c.shein_link, c.created_at
            FROM user_favorites f
            JOIN clothing_items c ON c.id = f.clothing_item_id
            WHERE f.user_id = $1
            ORDER BY f.created_at DESC
            ",
        )
        .bind(user_id.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ClothingItem {
                id: ClothingItemId::new(r.id),
                name: r.name,
                description: r.description,
                image_url: r.image_url,
                price: r.price,
                shein_link: r.shein_link,
                created_at: r.created_at,
            })
            .collect())
    }

    /// Toggle a favorite on or off.
    ///
    /// # Returns
    ///
    /// Returns `true` if the item is now favorited, `false` if the toggle
    /// removed it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn toggle(
        &self,
        user_id: UserId,
        item_id: ClothingItemId,
    ) -> Result<bool, RepositoryError> {
        let removed = sqlx::query(
            r"
            DELETE FROM user_favorites
            WHERE user_id = $1 AND clothing_item_id = $2
            ",
        )
        .bind(user_id.as_i64())
        .bind(item_id.as_i64())
        .execute(self.pool)
        .await?;

        if removed.rows_affected() > 0 {
            return Ok(false);
        }

        sqlx::query(
            r"
            INSERT INTO user_favorites (user_id, clothing_item_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(user_id.as_i64())
        .bind(item_id.as_i64())
        .execute(self.pool)
        .await?;

        Ok(true)
    }
}
