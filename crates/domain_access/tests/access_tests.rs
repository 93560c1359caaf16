//! Access Control Gate Tests
//!
//! Covers the full gate state machine: role resolution through the store,
//! the pure authorization verdict, both denial redirect shapes, and the
//! fallback policy arms for failed lookups.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use domain_access::{
    authorize, AccessDecision, AccessGate, Authorization, DenialReason, FallbackPolicy, Identity,
    Role, RoleResolution, RoleStore, RoleStoreError,
};

/// Role store backed by a fixed map; `fail` simulates a network outage.
struct FixedRoleStore {
    roles: HashMap<String, Role>,
    fail: bool,
}

impl FixedRoleStore {
    fn with_roles(entries: &[(&str, Role)]) -> Self {
        Self {
            roles: entries
                .iter()
                .map(|(email, role)| (email.to_string(), *role))
                .collect(),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            roles: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl RoleStore for FixedRoleStore {
    async fn role_for(&self, email: &str) -> Result<Option<Role>, RoleStoreError> {
        if self.fail {
            return Err(RoleStoreError::Transport("connection refused".to_string()));
        }
        Ok(self.roles.get(email).copied())
    }
}

fn gate_with(entries: &[(&str, Role)]) -> AccessGate {
    AccessGate::new(Arc::new(FixedRoleStore::with_roles(entries)))
}

mod authorization_tests {
    use super::*;

    #[test]
    fn customer_denied_on_admin_route() {
        assert_eq!(
            authorize(&[Role::Admin], &RoleResolution::Resolved(Role::Customer)),
            Authorization::Deny
        );
    }

    #[test]
    fn every_role_allowed_when_all_roles_permitted() {
        let all = [Role::Admin, Role::Agent, Role::Customer];
        for role in Role::ALL {
            assert_eq!(
                authorize(&all, &RoleResolution::Resolved(role)),
                Authorization::Allow
            );
        }
    }

    #[test]
    fn pending_resolution_stays_pending() {
        assert_eq!(
            authorize(&[Role::Admin], &RoleResolution::Pending),
            Authorization::Pending
        );
        assert_eq!(
            authorize(&Role::ALL, &RoleResolution::Pending),
            Authorization::Pending
        );
    }
}

mod gate_tests {
    use super::*;

    #[tokio::test]
    async fn missing_identity_redirects_to_sign_in() {
        let gate = gate_with(&[]);
        let decision = gate.evaluate(None, &[Role::Customer], "/dashboard").await;

        assert_eq!(
            decision,
            AccessDecision::Denied(DenialReason::Unauthenticated)
        );
    }

    #[tokio::test]
    async fn permitted_role_is_allowed() {
        let gate = gate_with(&[("amy@example.com", Role::Agent)]);
        let identity = Identity::from_email("amy@example.com");

        let decision = gate
            .evaluate(Some(&identity), &[Role::Agent, Role::Admin], "/agent")
            .await;

        assert_eq!(decision, AccessDecision::Allowed(Role::Agent));
    }

    #[tokio::test]
    async fn forbidden_denial_carries_attempted_location() {
        let gate = gate_with(&[("cust@example.com", Role::Customer)]);
        let identity = Identity::from_email("cust@example.com");

        let decision = gate
            .evaluate(Some(&identity), &[Role::Admin], "/admin/users")
            .await;

        assert_eq!(
            decision,
            AccessDecision::Denied(DenialReason::Forbidden {
                role: Some(Role::Customer),
                attempted: "/admin/users".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn store_failure_denies_by_default() {
        let gate = AccessGate::new(Arc::new(FixedRoleStore::failing()));
        let identity = Identity::from_email("amy@example.com");

        assert_eq!(
            gate.resolve_role(&identity).await,
            RoleResolution::Unresolved
        );

        let decision = gate
            .evaluate(Some(&identity), &[Role::Customer], "/dashboard")
            .await;
        assert!(matches!(
            decision,
            AccessDecision::Denied(DenialReason::Forbidden { role: None, .. })
        ));
    }

    #[tokio::test]
    async fn assume_role_fallback_reproduces_legacy_behavior() {
        let gate = AccessGate::new(Arc::new(FixedRoleStore::failing()))
            .with_fallback(FallbackPolicy::AssumeRole(Role::Customer));
        let identity = Identity::from_email("amy@example.com");

        assert_eq!(
            gate.resolve_role(&identity).await,
            RoleResolution::Resolved(Role::Customer)
        );

        // The legacy fallback still cannot reach agent/admin surfaces
        let decision = gate
            .evaluate(Some(&identity), &[Role::Admin], "/admin")
            .await;
        assert!(matches!(decision, AccessDecision::Denied(_)));
    }

    #[tokio::test]
    async fn unknown_email_follows_fallback_policy() {
        let gate = gate_with(&[("known@example.com", Role::Customer)]);
        let identity = Identity::from_email("stranger@example.com");

        assert_eq!(
            gate.resolve_role(&identity).await,
            RoleResolution::Unresolved
        );
    }
}
