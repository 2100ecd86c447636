//! User domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_CLIENT_ADMIN, ROLE_STAFF, ROLE_SUPER_ADMIN};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    ClientAdmin,
    Staff,
}

impl Role {
    /// Check if this role operates platform-wide (not bound to a client)
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }

    /// Check if this role administers a single client
    pub fn is_client_admin(&self) -> bool {
        matches!(self, Role::ClientAdmin)
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            ROLE_SUPER_ADMIN => Role::SuperAdmin,
            ROLE_CLIENT_ADMIN => Role::ClientAdmin,
            _ => Role::Staff,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::SuperAdmin => write!(f, "{}", ROLE_SUPER_ADMIN),
            Role::ClientAdmin => write!(f, "{}", ROLE_CLIENT_ADMIN),
            Role::Staff => write!(f, "{}", ROLE_STAFF),
        }
    }
}

/// Per-user feature flags for client-scoped accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Permissions {
    pub dashboard: bool,
    pub upload: bool,
    pub reports: bool,
    pub export: bool,
}

impl Default for Permissions {
    fn default() -> Self {
        // New accounts can see the dashboard; everything else is opt-in
        Self {
            dashboard: true,
            upload: false,
            reports: false,
            export: false,
        }
    }
}

impl Permissions {
    /// Full access, used for admin roles
    pub fn all() -> Self {
        Self {
            dashboard: true,
            upload: true,
            reports: true,
            export: true,
        }
    }
}

/// User domain entity.
///
/// The whole record is serializable because the current-user snapshot is
/// persisted to the durable session slot. There is no credential material:
/// passwords are accepted at the door and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Owning client; `None` only for super_admin
    pub client_id: Option<i64>,
    pub is_approved: bool,
    pub last_login: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub permissions: Permissions,
}

impl User {
    /// Check if this user may act on the given client's data
    pub fn can_access_client(&self, client_id: i64) -> bool {
        self.role.is_super_admin() || self.client_id == Some(client_id)
    }

    /// The client filter this user's views are scoped to (`None` = platform-wide)
    pub fn scope(&self) -> Option<i64> {
        if self.role.is_super_admin() {
            None
        } else {
            self.client_id
        }
    }
}

/// User response (shape returned to the console)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    /// User email address
    #[schema(example = "admin@fraudplatform.com")]
    pub email: String,
    /// User display name
    #[schema(example = "Platform Admin")]
    pub name: String,
    /// User role
    #[schema(example = "super_admin")]
    pub role: String,
    pub client_id: Option<i64>,
    pub is_approved: bool,
    pub last_login: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub permissions: Permissions,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role.to_string(),
            client_id: user.client_id,
            is_approved: user.is_approved,
            last_login: user.last_login,
            department: user.department,
            position: user.position,
            permissions: user.permissions,
        }
    }
}
