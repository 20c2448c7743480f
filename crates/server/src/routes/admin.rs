//! Admin user-management route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use vestiubem_core::UserId;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::User;
use crate::state::AppState;

/// `GET /api/admin/users` - all registered users, newest first.
pub async fn list_users(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list().await?;

    Ok(Json(users))
}

/// `DELETE /api/admin/users/{id}` - remove a user.
///
/// Cascades to the user's gallery, favorites, and password row. Admins
/// can't delete their own account while logged in with it.
pub async fn delete_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    let id = UserId::new(id);

    if id == admin.id {
        return Err(AppError::BadRequest(
            "cannot delete the account you are logged in with".to_string(),
        ));
    }

    let deleted = UserRepository::new(state.pool()).delete(id).await?;

    if !deleted {
        return Err(AppError::NotFound(format!("user {id}")));
    }

    tracing::info!(user_id = %id, admin = %admin.email, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
