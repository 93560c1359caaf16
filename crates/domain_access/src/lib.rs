//! Access Control Domain
//!
//! This crate implements the role-gated access model for the insurance
//! portal. A signed-in identity is resolved to a role (customer, agent, or
//! admin) through a remote role store, and guarded operations are permitted
//! or denied against the set of roles they require.
//!
//! # Gate state machine
//!
//! ```text
//! Pending -> Allowed
//!         \-> Denied(Unauthenticated)  -> sign-in redirect
//!         \-> Denied(Forbidden)        -> forbidden redirect + attempted location
//! ```
//!
//! Failed role lookups never crash the gate; they are mapped through an
//! explicit [`FallbackPolicy`], deny-by-default.

pub mod gate;
pub mod identity;
pub mod role;
pub mod store;

pub use gate::{
    authorize, AccessDecision, AccessGate, Authorization, DenialReason, FallbackPolicy,
    RoleResolution,
};
pub use identity::Identity;
pub use role::{Role, UnknownRole};
pub use store::{RoleStore, RoleStoreError};
