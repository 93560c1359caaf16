//! HTTP API Layer
//!
//! This crate provides the REST API for the insurance portal using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Session, rate profiles, quoting, applications, health
//! - **Middleware**: Identity extraction, role gates, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses carrying the gate's
//!   redirect semantics
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_access::AccessGate;
use domain_quoting::{ApplicationSubmitter, RateProfileStore};

use crate::config::ApiConfig;
use crate::handlers::{applications, health, policies, quotes, session};
use crate::middleware::{
    applicant_gate, audit_middleware, identity_middleware, portal_gate, staff_gate,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub gate: AccessGate,
    pub profiles: Arc<dyn RateProfileStore>,
    pub submitter: Arc<dyn ApplicationSubmitter>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// Route groups carry their own role gates: every signed-in role may browse
/// and quote, customers and agents may submit applications, agents and
/// admins may review them.
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Browsing and quoting, any portal role
    let portal_routes = Router::new()
        .route("/session", get(session::current_session))
        .route("/policies", get(policies::list_policies))
        .route("/policies/:id", get(policies::get_policy))
        .route("/policies/:id/quote", post(quotes::create_quote))
        .layer(from_fn_with_state(state.clone(), portal_gate));

    // Application submission, customers and agents
    let submission_routes = Router::new()
        .route("/applications", post(applications::submit_application))
        .layer(from_fn_with_state(state.clone(), applicant_gate));

    // Review dashboard, agents and admins
    let review_routes = Router::new()
        .route("/review/applications", get(applications::list_applications))
        .layer(from_fn_with_state(state.clone(), staff_gate));

    // Protected API routes
    let api_routes = Router::new()
        .merge(portal_routes)
        .merge(submission_routes)
        .merge(review_routes)
        .layer(from_fn(audit_middleware))
        .layer(from_fn_with_state(state.clone(), identity_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
