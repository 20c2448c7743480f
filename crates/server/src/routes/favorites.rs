//! Favorites route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use vestiubem_core::ClothingItemId;

use crate::db::{CatalogRepository, FavoriteRepository};
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::ClothingItem;
use crate::state::AppState;

/// Response for a toggle: the new state plus the whole updated list, so
/// the client doesn't need a follow-up fetch.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub favorited: bool,
    pub favorites: Vec<ClothingItem>,
}

/// `GET /api/favorites` - the caller's favorited items.
pub async fn list(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<ClothingItem>>> {
    let favorites = FavoriteRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    Ok(Json(favorites))
}

/// `POST /api/favorites/{item_id}/toggle` - flip a favorite on or off.
pub async fn toggle(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> Result<Json<ToggleResponse>> {
    let item_id = ClothingItemId::new(item_id);

    // Only existing catalog items can be favorited.
    CatalogRepository::new(state.pool())
        .get(item_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("catalog item {item_id}")))?;

    let repo = FavoriteRepository::new(state.pool());
    let favorited = repo.toggle(user.id, item_id).await?;
    let favorites = repo.list_for_user(user.id).await?;

    Ok(Json(ToggleResponse {
        favorited,
        favorites,
    }))
}
