//! Application handlers

use axum::{extract::State, Extension, Json};
use validator::Validate;

use core_kernel::PolicyId;
use domain_access::Identity;
use domain_quoting::{quote, ApplicationSubmission};

use crate::dto::quoting::{
    ApplicationCreatedResponse, ApplicationSummary, SubmitApplicationRequest,
};
use crate::error::ApiError;
use crate::handlers::quotes::checked_request;
use crate::AppState;

/// Submits a priced application
///
/// The estimate is recomputed here rather than trusted from the client, so
/// an out-of-range age blocks submission the same way it blocks quoting.
pub async fn submit_application(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(dto): Json<SubmitApplicationRequest>,
) -> Result<Json<ApplicationCreatedResponse>, ApiError> {
    dto.validate()?;

    let policy_id = PolicyId::from(dto.policy_id);
    let profile = state
        .profiles
        .profile(policy_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Policy {} not found", dto.policy_id)))?;

    let request = checked_request(&dto.quote, &profile)?;
    let estimate = quote(&request, &profile)?;

    let application_id = state
        .submitter
        .submit(ApplicationSubmission {
            policy_id,
            applicant_email: identity.email,
            request,
            estimate,
        })
        .await?;

    Ok(Json(ApplicationCreatedResponse { application_id }))
}

/// Lists accepted applications for the review dashboard
pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicationSummary>>, ApiError> {
    let accepted = state.submitter.list().await;
    Ok(Json(accepted.into_iter().map(Into::into).collect()))
}
