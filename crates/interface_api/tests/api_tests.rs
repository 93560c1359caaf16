//! End-to-end API tests
//!
//! Runs the full router, gates included, against canned stores. Tokens are
//! minted with the same secret the test config carries, so the identity
//! middleware exercises real validation.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use domain_access::Identity;
use infra_clients::{InMemoryProfileCatalog, RecordingSubmitter};
use interface_api::{auth::create_token, config::ApiConfig, create_router, AppState};
use test_utils::{seeded_gate, IdFixtures, IdentityFixtures, ProfileFixtures};

fn test_state() -> AppState {
    let config = ApiConfig::default();
    let gate = seeded_gate();
    let catalog = InMemoryProfileCatalog::new(vec![
        ProfileFixtures::term_life(),
        ProfileFixtures::senior_term(),
    ]);

    AppState {
        gate,
        profiles: Arc::new(catalog),
        submitter: Arc::new(RecordingSubmitter::new()),
        config,
    }
}

fn test_server() -> TestServer {
    TestServer::new(create_router(test_state())).unwrap()
}

fn token_for(identity: &Identity) -> String {
    let config = ApiConfig::default();
    create_token(identity, &config.jwt_secret, config.jwt_expiration_secs).unwrap()
}

/// The term life profile's quote form input for the standard scenario:
/// a 30-year-old non-smoking male, 50,000 over 20 years.
fn standard_quote_body() -> Value {
    json!({
        "age": 30,
        "gender": "male",
        "coverage": "50000.00",
        "duration_years": 20,
        "smoker": false
    })
}

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn health_is_public() {
        let server = test_server();
        let response = server.get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn readiness_reports_ready_with_seeded_catalog() {
        let server = test_server();
        let response = server.get("/health/ready").await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ready");
    }

    #[tokio::test]
    async fn readiness_fails_with_empty_catalog() {
        let mut state = test_state();
        state.profiles = Arc::new(InMemoryProfileCatalog::new(vec![]));
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/health/ready").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }
}

mod gate_tests {
    use super::*;

    #[tokio::test]
    async fn anonymous_caller_is_pointed_at_sign_in() {
        let server = test_server();
        let response = server.get("/api/v1/policies").await;

        response.assert_status_unauthorized();
        let body = response.json::<Value>();
        assert_eq!(body["error"], "unauthenticated");
        assert_eq!(body["redirect_to"], "/signin");
    }

    #[tokio::test]
    async fn garbage_token_is_treated_as_no_session() {
        let server = test_server();
        let response = server
            .get("/api/v1/policies")
            .authorization_bearer("not-a-jwt")
            .await;

        response.assert_status_unauthorized();
        assert_eq!(response.json::<Value>()["redirect_to"], "/signin");
    }

    #[tokio::test]
    async fn customer_cannot_reach_the_review_dashboard() {
        let server = test_server();
        let token = token_for(&IdentityFixtures::customer());

        let response = server
            .get("/api/v1/review/applications")
            .authorization_bearer(&token)
            .await;

        response.assert_status_forbidden();
        let body = response.json::<Value>();
        assert_eq!(body["error"], "forbidden");
        assert_eq!(body["redirect_to"], "/forbidden");
        assert_eq!(body["attempted"], "/review/applications");
        assert_eq!(body["role"], "customer");
    }

    #[tokio::test]
    async fn unknown_email_is_denied_not_assumed() {
        // Deny-by-default: a valid token whose email has no directory entry
        // must not be waved through as a customer.
        let server = test_server();
        let token = token_for(&IdentityFixtures::stranger());

        let response = server
            .get("/api/v1/policies")
            .authorization_bearer(&token)
            .await;

        response.assert_status_forbidden();
        let body = response.json::<Value>();
        assert_eq!(body["role"], Value::Null);
        assert_eq!(body["attempted"], "/policies");
    }

    #[tokio::test]
    async fn admin_cannot_submit_applications() {
        let server = test_server();
        let token = token_for(&IdentityFixtures::admin());

        let response = server
            .post("/api/v1/applications")
            .authorization_bearer(&token)
            .json(&json!({
                "policy_id": *IdFixtures::policy_id().as_uuid(),
                "quote": standard_quote_body()
            }))
            .await;

        response.assert_status_forbidden();
        assert_eq!(response.json::<Value>()["attempted"], "/applications");
    }
}

mod session_tests {
    use super::*;

    #[tokio::test]
    async fn session_returns_identity_and_resolved_role() {
        let server = test_server();
        let token = token_for(&IdentityFixtures::agent());

        let response = server
            .get("/api/v1/session")
            .authorization_bearer(&token)
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["email"], "agent@example.com");
        assert_eq!(body["display_name"], "Avery Agent");
        assert_eq!(body["role"], "agent");
    }
}

mod policy_tests {
    use super::*;

    #[tokio::test]
    async fn customer_lists_the_catalog() {
        let server = test_server();
        let token = token_for(&IdentityFixtures::customer());

        let response = server
            .get("/api/v1/policies")
            .authorization_bearer(&token)
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Term Life", "Senior Term"]);
    }

    #[tokio::test]
    async fn single_profile_carries_its_options() {
        let server = test_server();
        let token = token_for(&IdentityFixtures::customer());

        let response = server
            .get(&format!(
                "/api/v1/policies/{}",
                IdFixtures::policy_id().as_uuid()
            ))
            .authorization_bearer(&token)
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["name"], "Term Life");
        assert_eq!(body["min_age"], 18);
        assert_eq!(body["max_age"], 65);
        assert_eq!(body["duration_options"], json!([10, 15, 20, 25, 30]));
    }

    #[tokio::test]
    async fn unknown_policy_is_not_found() {
        let server = test_server();
        let token = token_for(&IdentityFixtures::customer());

        let response = server
            .get(&format!(
                "/api/v1/policies/{}",
                uuid::Uuid::nil()
            ))
            .authorization_bearer(&token)
            .await;

        response.assert_status_not_found();
    }
}

mod quote_tests {
    use super::*;

    #[tokio::test]
    async fn standard_scenario_prices_as_published() {
        // 50000 * 0.5% = 250, male * 1.10 = 275 annual; 23 monthly;
        // 275 * 20 = 5500 total.
        let server = test_server();
        let token = token_for(&IdentityFixtures::customer());

        let response = server
            .post(&format!(
                "/api/v1/policies/{}/quote",
                IdFixtures::policy_id().as_uuid()
            ))
            .authorization_bearer(&token)
            .json(&standard_quote_body())
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["annual"], json!(dec!(275)));
        assert_eq!(body["monthly"], json!(dec!(23)));
        assert_eq!(body["total"], json!(dec!(5500)));
        assert_eq!(body["currency"], "USD");
    }

    #[tokio::test]
    async fn age_above_the_entry_window_names_the_bound() {
        let server = test_server();
        let token = token_for(&IdentityFixtures::customer());

        let mut body = standard_quote_body();
        body["age"] = json!(70);

        let response = server
            .post(&format!(
                "/api/v1/policies/{}/quote",
                IdFixtures::policy_id().as_uuid()
            ))
            .authorization_bearer(&token)
            .json(&body)
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body = response.json::<Value>();
        assert_eq!(body["kind"], "age_above_maximum");
        assert_eq!(body["bound"], 65);
    }

    #[tokio::test]
    async fn off_menu_coverage_is_rejected_before_the_engine() {
        let server = test_server();
        let token = token_for(&IdentityFixtures::customer());

        let mut body = standard_quote_body();
        body["coverage"] = json!("60000.00");

        let response = server
            .post(&format!(
                "/api/v1/policies/{}/quote",
                IdFixtures::policy_id().as_uuid()
            ))
            .authorization_bearer(&token)
            .json(&body)
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"], "bad_request");
    }

    #[tokio::test]
    async fn off_menu_duration_is_rejected_before_the_engine() {
        let server = test_server();
        let token = token_for(&IdentityFixtures::customer());

        let mut body = standard_quote_body();
        body["duration_years"] = json!(13);

        let response = server
            .post(&format!(
                "/api/v1/policies/{}/quote",
                IdFixtures::policy_id().as_uuid()
            ))
            .authorization_bearer(&token)
            .json(&body)
            .await;

        response.assert_status_bad_request();
    }
}

mod application_tests {
    use super::*;

    #[tokio::test]
    async fn submission_reprices_and_lands_on_the_review_dashboard() {
        let server = test_server();
        let customer_token = token_for(&IdentityFixtures::customer());
        let agent_token = token_for(&IdentityFixtures::agent());

        let response = server
            .post("/api/v1/applications")
            .authorization_bearer(&customer_token)
            .json(&json!({
                "policy_id": *IdFixtures::policy_id().as_uuid(),
                "quote": standard_quote_body()
            }))
            .await;

        response.assert_status_ok();
        let created = response.json::<Value>();
        assert!(created["application_id"].is_string());

        let response = server
            .get("/api/v1/review/applications")
            .authorization_bearer(&agent_token)
            .await;

        response.assert_status_ok();
        let rows = response.json::<Value>();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["applicant_email"], "customer@example.com");
        assert_eq!(rows[0]["annual"], json!(dec!(275)));
        assert_eq!(rows[0]["total"], json!(dec!(5500)));
    }

    #[tokio::test]
    async fn out_of_range_age_blocks_submission() {
        let server = test_server();
        let token = token_for(&IdentityFixtures::customer());

        let mut quote = standard_quote_body();
        quote["age"] = json!(17);

        let response = server
            .post("/api/v1/applications")
            .authorization_bearer(&token)
            .json(&json!({
                "policy_id": *IdFixtures::policy_id().as_uuid(),
                "quote": quote
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["kind"], "age_below_minimum");
    }

    #[tokio::test]
    async fn submission_against_an_unknown_policy_is_not_found() {
        let server = test_server();
        let token = token_for(&IdentityFixtures::customer());

        let response = server
            .post("/api/v1/applications")
            .authorization_bearer(&token)
            .json(&json!({
                "policy_id": uuid::Uuid::nil(),
                "quote": standard_quote_body()
            }))
            .await;

        response.assert_status_not_found();
    }
}
