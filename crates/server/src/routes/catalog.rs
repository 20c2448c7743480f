//! Catalog route handlers.
//!
//! The item list is public; every mutation goes through `RequireAdmin`
//! before the handler body runs.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use vestiubem_core::ClothingItemId;

use crate::db::CatalogRepository;
use crate::db::catalog::NewClothingItem;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::ClothingItem;
use crate::state::AppState;

/// Create/update request body for a catalog item.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub description: Option<String>,
    pub image_url: String,
    pub price: Decimal,
    pub shein_link: String,
}

impl ItemPayload {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name must not be empty".to_string()));
        }
        if self.price.is_sign_negative() {
            return Err(AppError::BadRequest("price must not be negative".to_string()));
        }
        Ok(())
    }

    fn into_new_item(self) -> NewClothingItem {
        NewClothingItem {
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
            shein_link: self.shein_link,
        }
    }
}

/// `GET /api/catalog` - list all items, newest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ClothingItem>>> {
    let items = CatalogRepository::new(state.pool()).list().await?;

    Ok(Json(items))
}

/// `POST /api/catalog` - create an item (admin only).
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(body): Json<ItemPayload>,
) -> Result<(StatusCode, Json<ClothingItem>)> {
    body.validate()?;

    let item = CatalogRepository::new(state.pool())
        .create(&body.into_new_item())
        .await?;

    tracing::info!(item_id = %item.id, admin = %admin.email, "Catalog item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// `PUT /api/catalog/{id}` - update an item (admin only).
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ItemPayload>,
) -> Result<Json<ClothingItem>> {
    body.validate()?;

    let item = CatalogRepository::new(state.pool())
        .update(ClothingItemId::new(id), &body.into_new_item())
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => {
                AppError::NotFound(format!("catalog item {id}"))
            }
            other => AppError::Database(other),
        })?;

    Ok(Json(item))
}

/// `DELETE /api/catalog/{id}` - delete an item (admin only).
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let deleted = CatalogRepository::new(state.pool())
        .delete(ClothingItemId::new(id))
        .await?;

    if !deleted {
        return Err(AppError::NotFound(format!("catalog item {id}")));
    }

    tracing::info!(item_id = id, admin = %admin.email, "Catalog item deleted");

    Ok(StatusCode::NO_CONTENT)
}
