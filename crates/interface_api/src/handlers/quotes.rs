//! Quote handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::PolicyId;
use domain_quoting::{quote, PolicyRateProfile, QuoteRequest};

use crate::dto::quoting::{EstimateResponse, QuoteRequestDto};
use crate::error::ApiError;
use crate::AppState;

/// Computes a premium estimate for one product
///
/// Coverage and duration must come from the profile's enumerated options;
/// anything else never reaches the engine. Age is the engine's own gate and
/// answers 422 with the violated bound.
pub async fn create_quote(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<QuoteRequestDto>,
) -> Result<Json<EstimateResponse>, ApiError> {
    dto.validate()?;

    let profile = state
        .profiles
        .profile(PolicyId::from(id))
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Policy {id} not found")))?;

    let request = checked_request(&dto, &profile)?;
    let estimate = quote(&request, &profile)?;

    Ok(Json(estimate.into()))
}

/// Rejects selections outside the profile's enumerated sets
pub(crate) fn checked_request(
    dto: &QuoteRequestDto,
    profile: &PolicyRateProfile,
) -> Result<QuoteRequest, ApiError> {
    let request = dto.to_request(profile);

    if !profile.offers_coverage(&request.coverage) {
        return Err(ApiError::BadRequest(format!(
            "Coverage {} is not offered for {}",
            request.coverage, profile.name
        )));
    }
    if !profile.offers_duration(request.duration_years) {
        return Err(ApiError::BadRequest(format!(
            "Duration of {} years is not offered for {}",
            request.duration_years, profile.name
        )));
    }

    Ok(request)
}
