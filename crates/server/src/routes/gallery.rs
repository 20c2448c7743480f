//! Gallery route handlers.
//!
//! A user's generated images. Records are created by the client after a
//! successful try-on and are never updated; camelCase wire format matches
//! the try-on payloads.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::db::GenerationRepository;
use crate::db::generations::NewGeneratedImage;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::GeneratedImage;
use crate::state::AppState;

/// Request body for saving a try-on result.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveGenerationRequest {
    pub original_user_image: String,
    pub clothing_image: String,
    pub result_image: String,
    pub clothing_name: Option<String>,
}

/// `GET /api/generations` - the caller's gallery, newest first.
pub async fn list(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> Result<Json<Vec<GeneratedImage>>> {
    let images = GenerationRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    Ok(Json(images))
}

/// `POST /api/generations` - record a try-on result.
///
/// A record only exists for generations that produced an image, so an
/// empty result payload is rejected.
pub async fn create(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<SaveGenerationRequest>,
) -> Result<(StatusCode, Json<GeneratedImage>)> {
    if body.result_image.is_empty() {
        return Err(AppError::BadRequest(
            "resultImage must not be empty".to_string(),
        ));
    }

    let image = GenerationRepository::new(state.pool())
        .create(&NewGeneratedImage {
            user_id: user.id,
            original_user_image: body.original_user_image,
            clothing_image: body.clothing_image,
            result_image: body.result_image,
            clothing_name: body.clothing_name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(image)))
}
