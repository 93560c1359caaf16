//! The access control gate
//!
//! A guarded view names the roles permitted to enter it. The gate resolves
//! the caller's role through the [`RoleStore`] and produces an
//! [`AccessDecision`]:
//!
//! ```text
//! Pending -> Allowed
//!         \-> Denied(Unauthenticated)   no identity; redirect to sign-in
//!         \-> Denied(Forbidden)         role not permitted; redirect to
//!                                       the forbidden page, carrying the
//!                                       attempted location
//! ```
//!
//! There is no transition out of `Allowed`/`Denied`; each request is a
//! fresh evaluation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::identity::Identity;
use crate::role::Role;
use crate::store::RoleStore;

/// Outcome of a role lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleResolution {
    /// The lookup has not completed
    Pending,
    /// The store answered with a role
    Resolved(Role),
    /// The lookup failed and the policy is deny-by-default
    Unresolved,
}

/// Pure authorization verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// The lookup is still in flight; never treated as allow or deny
    Pending,
    Allow,
    Deny,
}

/// Why entry was denied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DenialReason {
    /// No identity at all; the caller should be sent to sign-in
    Unauthenticated,
    /// Identity present but the role is not permitted (or could not be
    /// resolved under deny-by-default); the attempted location is carried
    /// so the caller can return after fixing access
    Forbidden {
        role: Option<Role>,
        attempted: String,
    },
}

/// Terminal decision for one guarded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Role resolution still in flight; render a loading state, not a verdict
    Pending,
    /// Entry permitted with the resolved role
    Allowed(Role),
    /// Entry refused; carries the redirect semantics
    Denied(DenialReason),
}

/// What to do when the role lookup fails or finds no entry
///
/// The upstream product silently treated a failed lookup as `customer`,
/// which still grants dashboard access. That is a policy decision, so it is
/// explicit and configurable here, and deny-by-default unless configured
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy", content = "role")]
pub enum FallbackPolicy {
    /// Treat the user as unresolved and deny entry
    DenyByDefault,
    /// Assume the given role (legacy behavior with `Role::Customer`)
    AssumeRole(Role),
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy::DenyByDefault
    }
}

/// Pure membership test over a permitted-role set
///
/// `Pending` input always yields `Pending`; a decision is never synthesised
/// while the lookup is in flight.
pub fn authorize(required: &[Role], resolution: &RoleResolution) -> Authorization {
    match resolution {
        RoleResolution::Pending => Authorization::Pending,
        RoleResolution::Unresolved => Authorization::Deny,
        RoleResolution::Resolved(role) => {
            if required.contains(role) {
                Authorization::Allow
            } else {
                Authorization::Deny
            }
        }
    }
}

/// Resolves identities to roles and gates guarded operations
#[derive(Clone)]
pub struct AccessGate {
    store: Arc<dyn RoleStore>,
    fallback: FallbackPolicy,
}

impl AccessGate {
    /// Creates a gate with the default deny-by-default fallback
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self {
            store,
            fallback: FallbackPolicy::default(),
        }
    }

    /// Overrides the fallback policy for failed role lookups
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns the active fallback policy
    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Resolves the identity's role through the store
    ///
    /// A failed or empty lookup is mapped through the fallback policy; it
    /// never escapes as an error, so the gate cannot crash on a collaborator
    /// failure.
    pub async fn resolve_role(&self, identity: &Identity) -> RoleResolution {
        match self.store.role_for(&identity.email).await {
            Ok(Some(role)) => RoleResolution::Resolved(role),
            Ok(None) => {
                warn!(email = %identity.email, "No role recorded for user");
                self.apply_fallback()
            }
            Err(err) => {
                warn!(email = %identity.email, error = %err, "Role lookup failed");
                self.apply_fallback()
            }
        }
    }

    /// Runs the full gate state machine for one request
    ///
    /// `attempted` is the location the caller tried to reach; it is carried
    /// on forbidden denials so the caller can return there later.
    pub async fn evaluate(
        &self,
        identity: Option<&Identity>,
        required: &[Role],
        attempted: &str,
    ) -> AccessDecision {
        let Some(identity) = identity else {
            return AccessDecision::Denied(DenialReason::Unauthenticated);
        };

        let resolution = self.resolve_role(identity).await;
        match authorize(required, &resolution) {
            Authorization::Allow => match resolution {
                RoleResolution::Resolved(role) => AccessDecision::Allowed(role),
                // authorize only allows resolved roles
                _ => AccessDecision::Pending,
            },
            Authorization::Deny => {
                let role = match resolution {
                    RoleResolution::Resolved(role) => Some(role),
                    _ => None,
                };
                AccessDecision::Denied(DenialReason::Forbidden {
                    role,
                    attempted: attempted.to_string(),
                })
            }
            Authorization::Pending => AccessDecision::Pending,
        }
    }

    fn apply_fallback(&self) -> RoleResolution {
        match self.fallback {
            FallbackPolicy::DenyByDefault => RoleResolution::Unresolved,
            FallbackPolicy::AssumeRole(role) => {
                warn!(%role, "Assuming fallback role for unresolved lookup");
                RoleResolution::Resolved(role)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_membership() {
        let resolution = RoleResolution::Resolved(Role::Customer);

        assert_eq!(
            authorize(&[Role::Admin], &resolution),
            Authorization::Deny
        );
        assert_eq!(
            authorize(&[Role::Admin, Role::Agent, Role::Customer], &resolution),
            Authorization::Allow
        );
    }

    #[test]
    fn test_authorize_pending_never_decides() {
        for required in [
            vec![],
            vec![Role::Admin],
            vec![Role::Admin, Role::Agent, Role::Customer],
        ] {
            assert_eq!(
                authorize(&required, &RoleResolution::Pending),
                Authorization::Pending
            );
        }
    }

    #[test]
    fn test_authorize_unresolved_denies() {
        assert_eq!(
            authorize(&[Role::Customer], &RoleResolution::Unresolved),
            Authorization::Deny
        );
    }

    #[test]
    fn test_fallback_default_is_deny() {
        assert_eq!(FallbackPolicy::default(), FallbackPolicy::DenyByDefault);
    }
}
