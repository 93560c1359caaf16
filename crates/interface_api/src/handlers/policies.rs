//! Rate profile handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use core_kernel::PolicyId;

use crate::dto::quoting::RateProfileResponse;
use crate::error::ApiError;
use crate::AppState;

/// Lists the products available to quote
pub async fn list_policies(
    State(state): State<AppState>,
) -> Result<Json<Vec<RateProfileResponse>>, ApiError> {
    let profiles = state.profiles.list().await;
    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

/// Gets one product's rate profile
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RateProfileResponse>, ApiError> {
    let profile = state
        .profiles
        .profile(PolicyId::from(id))
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Policy {id} not found")))?;

    Ok(Json(profile.into()))
}
