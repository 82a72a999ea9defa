//! Authenticated identity and role types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role assigned to an identity, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hr,
    Manager,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }

    /// Parse a role from its lowercase wire name.
    pub fn parse(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "hr" => Some(Role::Hr),
            "manager" => Some(Role::Manager),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated actor's profile. One active instance or none,
/// owned by the session store and serialised into the session slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_name() {
        for role in [Role::Admin, Role::Hr, Role::Manager, Role::Employee] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("HR"), Some(Role::Hr));
        assert_eq!(Role::parse("intern"), None);
    }

    #[test]
    fn identity_serialises_to_flat_json() {
        let identity = Identity {
            id: "1".into(),
            email: "admin@company.com".into(),
            name: "Admin User".into(),
            role: Role::Admin,
        };
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["email"], "admin@company.com");
    }
}
