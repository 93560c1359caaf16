//! Application submission adapter
//!
//! [`RecordingSubmitter`] stands in for the downstream application intake
//! service: it assigns identifiers and keeps the accepted applications in
//! memory for the agent/admin dashboards.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use core_kernel::ApplicationId;
use domain_quoting::{
    ApplicationSubmission, ApplicationSubmitter, SubmissionError, SubmittedApplication,
};

/// In-memory application intake
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    accepted: Mutex<Vec<SubmittedApplication>>,
}

impl RecordingSubmitter {
    /// Creates an empty intake
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ApplicationSubmitter for RecordingSubmitter {
    async fn submit(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<ApplicationId, SubmissionError> {
        let application_id = ApplicationId::new_v7();
        info!(
            %application_id,
            policy_id = %submission.policy_id,
            applicant = %submission.applicant_email,
            "Application accepted"
        );

        let mut accepted = self
            .accepted
            .lock()
            .map_err(|_| SubmissionError::Rejected("intake unavailable".to_string()))?;
        accepted.push(SubmittedApplication {
            application_id,
            submission,
        });

        Ok(application_id)
    }

    async fn list(&self) -> Vec<SubmittedApplication> {
        self.accepted
            .lock()
            .map(|accepted| accepted.clone())
            .unwrap_or_default()
    }
}
