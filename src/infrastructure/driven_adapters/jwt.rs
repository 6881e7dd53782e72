//! JWT Token Service
//!
//! HS256 access tokens carrying the user's id, email and role.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::config::JwtConfig;
use crate::domain::gateways::TokenService;
use crate::domain::models::{Identity, UserId, UserRole};
use crate::shared::errors::SecurityError;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Email
    pub email: String,
    /// Role
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// jsonwebtoken implementation of TokenService
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in_secs: i64,
}

impl JwtTokenService {
    #[must_use]
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expires_in_secs: config.expires_in_secs,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, identity: &Identity) -> Result<String, SecurityError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: identity.user_id.to_string(),
            email: identity.email.clone(),
            role: identity.role.to_string(),
            iat: now,
            exp: now + self.expires_in_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| SecurityError::TokenEncoding(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<Identity, SecurityError> {
        // Pin the algorithm to prevent algorithm confusion attacks
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 60;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| SecurityError::InvalidToken)?
            .claims;

        let user_id: UserId = claims.sub.parse().map_err(|_| SecurityError::InvalidToken)?;
        let role: UserRole = claims.role.parse().map_err(|_| SecurityError::InvalidToken)?;

        Ok(Identity {
            user_id,
            email: claims.email,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-jwt-secret-key-for-unit-testing-only-32";

    fn service(expires_in_secs: i64) -> JwtTokenService {
        JwtTokenService::new(&JwtConfig {
            secret: SECRET.to_string(),
            expires_in_secs,
        })
    }

    fn identity() -> Identity {
        Identity {
            user_id: UserId::new(12),
            email: "teacher1@test.com".to_string(),
            role: UserRole::Teacher,
        }
    }

    #[test]
    fn test_issued_token_verifies() {
        let service = service(3600);
        let token = service.issue(&identity()).unwrap();
        assert_eq!(service.verify(&token).unwrap(), identity());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Beyond the 60 second leeway
        let service = service(-3600);
        let token = service.issue(&identity()).unwrap();
        assert!(matches!(service.verify(&token), Err(SecurityError::InvalidToken)));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = JwtTokenService::new(&JwtConfig {
            secret: "another-secret-that-is-also-long-enough-xx".to_string(),
            expires_in_secs: 3600,
        });
        let token = other.issue(&identity()).unwrap();
        assert!(service(3600).verify(&token).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(service(3600).verify("not.a.token").is_err());
    }
}
