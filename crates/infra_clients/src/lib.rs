//! Infrastructure adapters for the portal's external collaborators
//!
//! The domain crates define the ports ([`domain_access::RoleStore`],
//! [`domain_quoting::RateProfileStore`], [`domain_quoting::ApplicationSubmitter`]);
//! this crate provides the concrete clients: an HTTP role store against the
//! remote role service, an in-memory product catalog snapshot, and an
//! in-memory application intake.

pub mod catalog;
pub mod role_store;
pub mod submission;

pub use catalog::InMemoryProfileCatalog;
pub use role_store::{HttpRoleStore, InMemoryRoleStore};
pub use submission::RecordingSubmitter;
