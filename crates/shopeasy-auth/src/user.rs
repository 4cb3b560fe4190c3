//! User identity types.

use serde::{Deserialize, Serialize};
use shopeasy_commerce::ids::UserId;
use std::str::FromStr;

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Regular customer.
    #[default]
    Customer,
    /// Store administrator.
    Admin,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }

    /// Check if this is the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// The user identity carried by a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    /// Server-assigned user ID, when the stored record carries one.
    pub id: Option<UserId>,
    /// Display name.
    pub name: Option<String>,
    /// Authorization role.
    pub role: Role,
}

impl AuthUser {
    /// Customer identity with just an ID.
    pub fn customer(id: UserId) -> Self {
        Self {
            id: Some(id),
            name: None,
            role: Role::Customer,
        }
    }

    /// Admin identity with just an ID.
    pub fn admin(id: UserId) -> Self {
        Self {
            id: Some(id),
            name: None,
            role: Role::Admin,
        }
    }

    /// Parse a stored user record.
    ///
    /// Anything that is not a JSON object yields `None`. Fields the record
    /// lacks stay absent, and an unrecognized role falls back to customer;
    /// only outright malformed content means there is no user at all.
    pub fn from_stored_json(raw: &str) -> Option<Self> {
        let stored: StoredUser = serde_json::from_str(raw).ok()?;
        Some(stored.into_user())
    }
}

/// Stored shape of the user record. Lenient: every field optional,
/// unknown fields ignored.
#[derive(Debug, Clone, Deserialize)]
struct StoredUser {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

impl StoredUser {
    fn into_user(self) -> AuthUser {
        AuthUser {
            id: self.id.map(UserId::new),
            name: self.name,
            role: self
                .role
                .as_deref()
                .map(|r| r.parse().unwrap_or_default())
                .unwrap_or_default(),
        }
    }
}
