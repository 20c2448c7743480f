//! Catalog repository for clothing items.
//!
//! All mutations here are reached only through the admin extractor; the
//! repository itself is permission-agnostic.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use vestiubem_core::ClothingItemId;

use super::RepositoryError;
use crate::models::ClothingItem;

/// Raw `clothing_items` row.
#[derive(sqlx::FromRow)]
struct ClothingItemRow {
    id: i64,
    name: String,
    description: Option<String>,
    image_url: String,
    price: Decimal,
    shein_link: String,
    created_at: DateTime<Utc>,
}

impl From<ClothingItemRow> for ClothingItem {
    fn from(row: ClothingItemRow) -> Self {
        Self {
            id: ClothingItemId::new(row.id),
            name: row.name,
            description: row.description,
            image_url: row.image_url,
            price: row.price,
            shein_link: row.shein_link,
            created_at: row.created_at,
        }
    }
}

/// Fields for creating or updating a catalog item.
#[derive(Debug, Clone)]
pub struct NewClothingItem {
    pub name: String,
    pub description: Option<String>,
    pub image_url: String,
    pub price: Decimal,
    pub shein_link: String,
}

/// Repository for catalog database operations.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all catalog items, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ClothingItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, ClothingItemRow>(
            r"
            SELECT id, name, description, image_url, price, shein_link, created_at
            FROM clothing_items
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ClothingItem::from).collect())
    }

    /// Get a single catalog item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ClothingItemId) -> Result<Option<ClothingItem>, RepositoryError> {
        let row = sqlx::query_as::<_, ClothingItemRow>(
            r"
            SELECT id, name, description, image_url, price, shein_link, created_at
            FROM clothing_items
            WHERE id = $1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(ClothingItem::from))
    }

    /// Insert a new catalog item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(&self, item: &NewClothingItem) -> Result<ClothingItem, RepositoryError> {
        let row = sqlx::query_as::<_, ClothingItemRow>(
            r"
            INSERT INTO clothing_items (name, description, image_url, price, shein_link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, image_url, price, shein_link, created_at
            ",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.image_url)
        .bind(item.price)
        .bind(&item.shein_link)
        .fetch_one(self.pool)
        .await?;

        Ok(ClothingItem::from(row))
    }

    /// Update an existing catalog item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the item doesn't exist.
    pub async fn update(
        &self,
        id: ClothingItemId,
        item: &NewClothingItem,
    ) -> Result<ClothingItem, RepositoryError> {
        let row = sqlx::query_as::<_, ClothingItemRow>(
            r"
            UPDATE clothing_items
            SET name = $2, description = $3, image_url = $4, price = $5, shein_link = $6
            WHERE id = $1
            RETURNING id, name, description, image_url, price, shein_link, created_at
            ",
        )
        .bind(id.as_i64())
        .bind(&item.name)
        .bind(&item.description)
        .bind(&item.image_url)
        .bind(item.price)
        .bind(&item.shein_link)
        .fetch_optional(self.pool)
        .await?;

        row.map(ClothingItem::from).ok_or(RepositoryError::NotFound)
    }

    /// Delete a catalog item.
    ///
    /// # Returns
    ///
    /// Returns `true` if the item was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ClothingItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(r"DELETE FROM clothing_items WHERE id = $1")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count catalog items (used by the seeder to stay idempotent).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar(r"SELECT COUNT(*) FROM clothing_items")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
