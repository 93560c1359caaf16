//! API configuration

use domain_access::{FallbackPolicy, Role};
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// JWT secret for identity tokens
    pub jwt_secret: String,
    /// JWT expiration in seconds
    pub jwt_expiration_secs: u64,
    /// Base URL of the remote role store; in-memory store when unset
    pub role_store_url: Option<String>,
    /// What a failed role lookup resolves to: "deny" (default) or a role
    /// name to assume ("customer" reproduces the legacy behavior)
    pub role_fallback: String,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            role_store_url: None,
            role_fallback: "deny".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("PORTAL"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Interprets `role_fallback` as a gate fallback policy
    ///
    /// Unrecognised values fall back to deny-by-default, never to a role.
    pub fn fallback_policy(&self) -> FallbackPolicy {
        match self.role_fallback.parse::<Role>() {
            Ok(role) => FallbackPolicy::AssumeRole(role),
            Err(_) => FallbackPolicy::DenyByDefault,
        }
    }
}
