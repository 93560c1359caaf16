//! Identity token handling
//!
//! The portal's identity provider issues signed JWTs carrying the user's
//! email, display name, and photo. The API validates them and recovers an
//! [`Identity`]; roles are never read from the token, only from the role
//! store.

use chrono::{Duration, Utc};
use domain_access::Identity;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email address
    pub sub: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Profile photo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

impl Claims {
    /// Recovers the identity carried by the token
    pub fn identity(&self) -> Identity {
        Identity {
            email: self.sub.clone(),
            display_name: self.name.clone(),
            photo_url: self.picture.clone(),
        }
    }
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
}

/// Creates a signed identity token
///
/// # Arguments
///
/// * `identity` - The identity to encode
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(
    identity: &Identity,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: identity.email.clone(),
        name: identity.display_name.clone(),
        picture: identity.photo_url.clone(),
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates an identity token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        if e.to_string().contains("ExpiredSignature") {
            AuthError::TokenExpired
        } else {
            AuthError::InvalidToken
        }
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let identity = Identity {
            email: "amy@example.com".to_string(),
            display_name: Some("Amy".to_string()),
            photo_url: None,
        };

        let token = create_token(&identity, "test-secret", 3600).unwrap();
        let claims = validate_token(&token, "test-secret").unwrap();

        assert_eq!(claims.identity(), identity);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let identity = Identity::from_email("amy@example.com");
        let token = create_token(&identity, "secret-a", 3600).unwrap();

        assert!(matches!(
            validate_token(&token, "secret-b"),
            Err(AuthError::InvalidToken)
        ));
    }
}
