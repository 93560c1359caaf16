//! API error handling
//!
//! Denials from the access gate keep their redirect semantics on the wire:
//! unauthenticated callers are pointed at the sign-in page, forbidden
//! callers at the forbidden page with their attempted location echoed back.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_access::Role;
use domain_quoting::{QuoteError, SubmissionError};

/// Destination for callers without a session
pub const SIGN_IN_LOCATION: &str = "/signin";
/// Destination for callers whose role is not permitted
pub const FORBIDDEN_LOCATION: &str = "/forbidden";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Access denied")]
    Forbidden {
        role: Option<Role>,
        attempted: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound: Option<u8>,
}

impl ErrorResponse {
    fn new(error: &str, message: String) -> Self {
        Self {
            error: error.to_string(),
            message,
            redirect_to: None,
            attempted: None,
            role: None,
            kind: None,
            bound: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match self {
            ApiError::Unauthenticated => {
                let mut body = ErrorResponse::new("unauthenticated", message);
                body.redirect_to = Some(SIGN_IN_LOCATION.to_string());
                (StatusCode::UNAUTHORIZED, body)
            }
            ApiError::Forbidden { role, attempted } => {
                let mut body = ErrorResponse::new("forbidden", message);
                body.redirect_to = Some(FORBIDDEN_LOCATION.to_string());
                body.attempted = Some(attempted);
                body.role = role;
                (StatusCode::FORBIDDEN, body)
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::new("not_found", msg))
            }
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("bad_request", msg),
            ),
            ApiError::Quote(err) => {
                let mut body = ErrorResponse::new("validation_error", message);
                body.kind = Some(match err {
                    QuoteError::AgeBelowMinimum { .. } => "age_below_minimum",
                    QuoteError::AgeAboveMaximum { .. } => "age_above_maximum",
                });
                body.bound = Some(err.bound());
                (StatusCode::UNPROCESSABLE_ENTITY, body)
            }
            ApiError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new("validation_error", msg),
            ),
            ApiError::Upstream(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("upstream_error", msg),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("internal_error", msg),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
