use serde::Serialize;
use std::fmt;

/// Role carried by an authenticated principal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    SuperAdmin,
    Admin,
    Vendor,
    Support,
    User,
    /// Any role name the back-office does not know about. Never privileged.
    Other(String),
}

impl Role {
    pub fn parse(value: &str) -> Self {
        match value {
            "super_admin" => Role::SuperAdmin,
            "admin" => Role::Admin,
            "vendor" => Role::Vendor,
            "support" => Role::Support,
            "user" => Role::User,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Vendor => "vendor",
            Role::Support => "support",
            Role::User => "user",
            Role::Other(name) => name,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Authenticated actor resolved from an inbound request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: i64,
    pub role: Role,
}

impl Principal {
    pub fn new(id: i64, role: Role) -> Self {
        Self { id, role }
    }

    pub fn super_admin(id: i64) -> Self {
        Self::new(id, Role::SuperAdmin)
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }
}
