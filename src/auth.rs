//! Token issuance and validation for the admin surface.
//!
//! A single configured admin account authenticates with username plus the
//! SHA-256 hex of its password; successful logins receive an HS256 JWT
//! carrying username and role.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::db::checksum::calculate_checksum;

/// Errors from token operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Token creation failed: {0}")]
    TokenCreation(String),
}

/// JWT claims issued at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username.
    pub sub: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn new(username: &str, role: &str, ttl_seconds: u64) -> Self {
        let now = Utc::now().timestamp() as usize;
        Self {
            sub: username.to_string(),
            role: role.to_string(),
            iat: now,
            exp: now + ttl_seconds as usize,
        }
    }
}

/// HS256 token service. One instance lives in the application state.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: u64,
}

impl TokenService {
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
            ttl_seconds,
        }
    }

    /// Issue a token for an authenticated user.
    pub fn issue(&self, username: &str, role: &str) -> Result<String, AuthError> {
        let claims = Claims::new(username, role, self.ttl_seconds);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Validate a token and return its claims. Expired or tampered tokens
    /// fail.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

/// SHA-256 hex of a plaintext password, the format stored in configuration.
pub fn hash_password(password: &str) -> String {
    calculate_checksum(password)
}

/// Compare a plaintext password against a configured SHA-256 hex hash.
pub fn verify_password(password: &str, expected_sha256: &str) -> bool {
    hash_password(password) == expected_sha256
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_validate_roundtrip() {
        let service = TokenService::new("test-secret", 3600);
        let token = service.issue("admin", "ADMIN").unwrap();
        let claims = service.validate(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, "ADMIN");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenService::new("secret-a", 3600);
        let validator = TokenService::new("secret-b", 3600);
        let token = issuer.issue("admin", "ADMIN").unwrap();
        assert!(validator.validate(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = TokenService::new("test-secret", 3600);
        assert!(service.validate("not.a.token").is_err());
    }

    #[test]
    fn test_password_verification() {
        let hash = hash_password("admin");
        assert!(verify_password("admin", &hash));
        assert!(!verify_password("wrong", &hash));
    }
}
