//! Canned Store Implementations
//!
//! Test doubles for the ports the portal talks to. These replace the
//! network-backed clients in unit and integration tests so that gate and
//! catalog behavior can be exercised deterministically.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use domain_access::{AccessGate, Role, RoleStore, RoleStoreError};

use crate::fixtures::IdentityFixtures;

/// A role store backed by a fixed email-to-role map
#[derive(Debug, Clone, Default)]
pub struct StaticRoleStore {
    roles: HashMap<String, Role>,
}

impl StaticRoleStore {
    /// Creates an empty store; every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory entry
    pub fn with_role(mut self, email: impl Into<String>, role: Role) -> Self {
        self.roles.insert(email.into(), role);
        self
    }

    /// A store holding the three fixture identities under their roles
    pub fn seeded() -> Self {
        Self::new()
            .with_role(IdentityFixtures::customer().email, Role::Customer)
            .with_role(IdentityFixtures::agent().email, Role::Agent)
            .with_role(IdentityFixtures::admin().email, Role::Admin)
    }
}

#[async_trait]
impl RoleStore for StaticRoleStore {
    async fn role_for(&self, email: &str) -> Result<Option<Role>, RoleStoreError> {
        Ok(self.roles.get(email).copied())
    }
}

/// A role store whose every lookup fails with a transport error
///
/// Used to exercise the gate's fallback policy.
#[derive(Debug, Clone, Default)]
pub struct FailingRoleStore;

#[async_trait]
impl RoleStore for FailingRoleStore {
    async fn role_for(&self, _email: &str) -> Result<Option<Role>, RoleStoreError> {
        Err(RoleStoreError::Transport("connection refused".to_string()))
    }
}

/// An access gate over the seeded directory, with the default fallback
pub fn seeded_gate() -> AccessGate {
    AccessGate::new(Arc::new(StaticRoleStore::seeded()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_resolves_fixture_roles() {
        let store = StaticRoleStore::seeded();
        let role = store
            .role_for(&IdentityFixtures::agent().email)
            .await
            .unwrap();
        assert_eq!(role, Some(Role::Agent));
    }

    #[tokio::test]
    async fn failing_store_reports_transport_error() {
        let store = FailingRoleStore;
        let err = store.role_for("anyone@example.com").await.unwrap_err();
        assert!(matches!(err, RoleStoreError::Transport(_)));
    }
}
