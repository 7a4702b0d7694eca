//! Account roles.

use serde::{Deserialize, Serialize};

/// Permission level attached to a credential record.
///
/// Serializes as `"Admin"` / `"User"`, the on-disk strings of the
/// credential file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full access: manage products, adjust stock, create admin accounts.
    Admin,
    /// Read-only access: view and search products.
    User,
}

impl Role {
    /// Whether this role carries administrative privileges.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::User => write!(f, "User"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "User" => Ok(Self::User),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
