//! Token Service
//!
//! Issues and verifies the signed bearer tokens that prove caller
//! identity. Tokens are HS256 JWTs carrying `{sub, username}` with a
//! fixed validity window; verification failures (malformed, tampered,
//! expired) are ordinary errors, never panics.

use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Claims carried by an identity token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: internal user id
    pub sub: Uuid,
    /// Username at issue time
    pub username: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Issues and verifies identity tokens
///
/// Keys are derived once from the injected secret at construction.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: ChronoDuration,
}

impl TokenService {
    /// Build from config
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        let ttl = ChronoDuration::from_std(config.token_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid token TTL: {e}")))?;

        Ok(Self {
            encoding: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.token_secret.as_bytes()),
            ttl,
        })
    }

    /// Issue a signed token for a user
    pub fn issue(&self, user_id: &UserId, username: &UserName) -> AuthResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.into_uuid(),
            username: username.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))
    }

    /// Verify a presented token and recover its claims
    ///
    /// Fails with [`AuthError::InvalidToken`] on malformed input, bad
    /// signature, or expiry.
    pub fn verify(&self, token: &str) -> AuthResult<TokenClaims> {
        let validation = Validation::new(Algorithm::HS256);

        jsonwebtoken::decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        let config = AuthConfig::new(secret).unwrap();
        TokenService::new(&config).unwrap()
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let tokens = service("test-secret-for-roundtrip");
        let user_id = UserId::new();
        let username = UserName::new("alice").unwrap();

        let token = tokens.issue(&user_id, &username).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id.into_uuid());
        assert_eq!(claims.username, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let tokens = service("test-secret");
        assert!(tokens.verify("not-a-token").is_err());
        assert!(tokens.verify("").is_err());
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let tokens = service("test-secret");
        let token = tokens
            .issue(&UserId::new(), &UserName::new("alice").unwrap())
            .unwrap();

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(tokens.verify(&tampered).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issuer = service("secret-one");
        let verifier = service("secret-two");

        let token = issuer
            .issue(&UserId::new(), &UserName::new("alice").unwrap())
            .unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let secret = "test-secret-expiry";
        let tokens = service(secret);

        // Craft a token that expired an hour ago, signed with the same secret.
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: Uuid::new_v4(),
            username: "alice".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let expired = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(tokens.verify(&expired).is_err());
    }
}
