//! Session DTOs

use serde::Serialize;

use domain_access::{Identity, Role};

/// The signed-in user and their resolved role
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub role: Role,
}

impl SessionResponse {
    pub fn new(identity: Identity, role: Role) -> Self {
        Self {
            email: identity.email,
            display_name: identity.display_name,
            photo_url: identity.photo_url,
            role,
        }
    }
}
