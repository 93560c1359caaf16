//! Session handlers

use axum::{Extension, Json};

use domain_access::{Identity, Role};

use crate::dto::session::SessionResponse;
use crate::error::ApiError;

/// Returns the signed-in user and their resolved role
///
/// The identity and role extensions are installed by the gate; reaching
/// this handler without them is a routing bug.
pub async fn current_session(
    Extension(identity): Extension<Identity>,
    Extension(role): Extension<Role>,
) -> Result<Json<SessionResponse>, ApiError> {
    Ok(Json(SessionResponse::new(identity, role)))
}
