//! Role store port
//!
//! The role store is an external collaborator queried by email. Lookups can
//! fail (network, 5xx); how a failure is interpreted is decided by the
//! gate's [`FallbackPolicy`](crate::gate::FallbackPolicy), not here.

use async_trait::async_trait;
use thiserror::Error;

use crate::role::Role;

/// Errors from the remote role store
#[derive(Debug, Error)]
pub enum RoleStoreError {
    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("Role store transport error: {0}")]
    Transport(String),

    /// The store answered with a non-success status
    #[error("Role store returned status {0}")]
    UnexpectedStatus(u16),

    /// The store answered with a body we could not interpret
    #[error("Malformed role store response: {0}")]
    Malformed(String),
}

/// Lookup of a user's role by email
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Returns the role recorded for `email`, or `None` when the store has
    /// no entry for that address.
    async fn role_for(&self, email: &str) -> Result<Option<Role>, RoleStoreError>;
}
