//! Portal roles
//!
//! A role gates which dashboard surfaces a signed-in user may reach.
//! Roles are derived from the remote role store, never from the identity
//! token itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three portal roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Policyholder-facing dashboards
    Customer,
    /// Agent dashboards (applications, customers)
    Agent,
    /// Administrative dashboards (users, content, transactions)
    Admin,
}

impl Role {
    /// All roles, in ascending order of privilege
    pub const ALL: [Role; 3] = [Role::Customer, Role::Agent, Role::Admin];

    /// Returns the lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Agent => "agent",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "agent" => Ok(Role::Agent),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognised role name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);
