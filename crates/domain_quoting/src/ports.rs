//! Ports to external collaborators
//!
//! The policy store supplies rate profiles; the submission collaborator
//! accepts a priced application. Both are out-of-process services, so the
//! traits are async and the adapters live in `infra_clients`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::{ApplicationId, PolicyId};

use crate::estimate::PremiumEstimate;
use crate::profile::PolicyRateProfile;
use crate::request::QuoteRequest;

/// Read access to the product catalog
#[async_trait]
pub trait RateProfileStore: Send + Sync {
    /// Returns the rate profile for one product, if it exists
    async fn profile(&self, policy_id: PolicyId) -> Option<PolicyRateProfile>;

    /// Returns all products available to quote
    async fn list(&self) -> Vec<PolicyRateProfile>;
}

/// A priced application handed to the submission collaborator
///
/// The estimate is recomputed server-side immediately before submission; a
/// submission is never built from a request whose age fails validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSubmission {
    pub policy_id: PolicyId,
    pub applicant_email: String,
    pub request: QuoteRequest,
    pub estimate: PremiumEstimate,
}

/// Errors from the submission collaborator
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Submission transport error: {0}")]
    Transport(String),
}

/// An application the collaborator has accepted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedApplication {
    pub application_id: ApplicationId,
    pub submission: ApplicationSubmission,
}

/// Accepts priced applications and returns the created identifier
///
/// The same collaborator serves the agent/admin dashboards, so it also
/// exposes the applications it has accepted.
#[async_trait]
pub trait ApplicationSubmitter: Send + Sync {
    async fn submit(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<ApplicationId, SubmissionError>;

    /// Returns the applications accepted so far
    async fn list(&self) -> Vec<SubmittedApplication>;
}
