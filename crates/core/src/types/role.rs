//! User role with different permission levels.

use serde::{Deserialize, Serialize};

/// Role of a user account.
///
/// Only administrators may mutate the clothing catalog or manage users.
/// Escalation happens exclusively through the CLI or seed process - the HTTP
/// API never changes a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Ordinary user: try-on, gallery, favorites.
    #[default]
    User,
    /// Administrator: catalog and user management on top of everything else.
    Admin,
}

impl UserRole {
    /// Whether this role grants administrative access.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Database/string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`UserRole`] from a string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid role: {0} (expected 'user' or 'admin')")]
pub struct RoleParseError(pub String);

impl std::str::FromStr for UserRole {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let role: UserRole = "admin".parse().unwrap();
        assert_eq!(role, UserRole::Admin);
        assert_eq!(role.as_str(), "admin");

        let role: UserRole = "user".parse().unwrap();
        assert_eq!(role, UserRole::User);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("superuser".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"admin\"");

        let parsed: UserRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, UserRole::User);
    }
}
