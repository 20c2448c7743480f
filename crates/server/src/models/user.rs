//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use vestiubem_core::{Email, UserId, UserRole};

/// A registered user (domain type).
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// Role; determines catalog/user-management access.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}
