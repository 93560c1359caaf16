//! Role store adapters
//!
//! [`HttpRoleStore`] talks to the remote role service (`GET /roles/{email}`
//! returning `{"role": "customer"}`). [`InMemoryRoleStore`] backs tests and
//! local development.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use domain_access::{Role, RoleStore, RoleStoreError};

/// Wire shape of the role service response
#[derive(Debug, Deserialize)]
struct RoleDocument {
    role: String,
}

impl RoleDocument {
    fn into_role(self) -> Result<Role, RoleStoreError> {
        self.role
            .parse()
            .map_err(|e: domain_access::UnknownRole| RoleStoreError::Malformed(e.to_string()))
    }
}

/// Role store backed by the remote role service
#[derive(Clone)]
pub struct HttpRoleStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRoleStore {
    /// Creates a store against `base_url` (no trailing slash)
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn role_url(&self, email: &str) -> String {
        format!("{}/roles/{}", self.base_url, email)
    }
}

#[async_trait]
impl RoleStore for HttpRoleStore {
    async fn role_for(&self, email: &str) -> Result<Option<Role>, RoleStoreError> {
        let url = self.role_url(email);
        debug!(%url, "Looking up role");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RoleStoreError::Transport(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                let document: RoleDocument = response
                    .json()
                    .await
                    .map_err(|e| RoleStoreError::Malformed(e.to_string()))?;
                document.into_role().map(Some)
            }
            reqwest::StatusCode::NOT_FOUND => Ok(None),
            status => Err(RoleStoreError::UnexpectedStatus(status.as_u16())),
        }
    }
}

/// Fixed-map role store for tests and local development
#[derive(Debug, Default, Clone)]
pub struct InMemoryRoleStore {
    roles: HashMap<String, Role>,
}

impl InMemoryRoleStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a role entry, builder style
    pub fn with_role(mut self, email: impl Into<String>, role: Role) -> Self {
        self.roles.insert(email.into(), role);
        self
    }
}

#[async_trait]
impl RoleStore for InMemoryRoleStore {
    async fn role_for(&self, email: &str) -> Result<Option<Role>, RoleStoreError> {
        Ok(self.roles.get(email).copied())
    }
}
