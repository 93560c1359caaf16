//! Signed-in identity
//!
//! The identity is owned by the external authentication provider and is
//! read-only here. The role store is keyed by the identity's email.

use serde::{Deserialize, Serialize};

/// An authenticated user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Email address, the role-store lookup key
    pub email: String,
    /// Display name, if the provider supplied one
    pub display_name: Option<String>,
    /// Profile photo URL, if the provider supplied one
    pub photo_url: Option<String>,
}

impl Identity {
    /// Creates an identity with only an email address
    pub fn from_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: None,
            photo_url: None,
        }
    }
}
