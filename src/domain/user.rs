//! Admin user domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{ROLE_SUPER_ADMIN, ROLE_USER};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    SuperAdmin,
}

impl UserRole {
    /// Check if this role operates the platform (user/menu management,
    /// review actions, impersonation)
    pub fn is_super_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_SUPER_ADMIN => UserRole::SuperAdmin,
            _ => UserRole::User,
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::SuperAdmin => write!(f, "{}", ROLE_SUPER_ADMIN),
            UserRole::User => write!(f, "{}", ROLE_USER),
        }
    }
}

/// Admin user domain entity.
///
/// Regular users own exactly one portfolio; super-admins own none and
/// manage platform configuration and the review workflow instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdminUser {
    pub fn is_super_admin(&self) -> bool {
        self.role.is_super_admin()
    }
}

/// User creation data (super-admin user management or signup)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password (minimum 8 characters)
    #[schema(min_length = 8)]
    pub password: String,
    /// User display name
    pub name: Option<String>,
    /// Role; the user management form accepts "super_admin" here as well
    #[schema(example = "user")]
    pub role: Option<String>,
}

/// User update data
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,
    /// New password (re-hashed on update)
    pub password: Option<String>,
    /// New role
    pub role: Option<String>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    #[schema(example = "user@example.com")]
    pub email: String,
    pub name: Option<String>,
    #[schema(example = "user")]
    pub role: String,
    /// The portfolio this user owns, if any
    pub portfolio_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn from_user(user: AdminUser, portfolio_id: Option<Uuid>) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role.to_string(),
            portfolio_id,
            created_at: user.created_at,
        }
    }
}
