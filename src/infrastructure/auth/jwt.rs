//! JWT token issuance and verification

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

use crate::domain::DomainError;
use crate::domain::user::{User, UserRole};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: Uuid,
    /// Display name
    pub name: String,
    /// Account role, so the gate can authorize without a store lookup
    pub role: UserRole,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl Claims {
    /// Create new claims for a user
    pub fn new(user: &User, lifetime_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(lifetime_hours as i64);

        Self {
            sub: user.id(),
            name: user.name().to_string(),
            role: user.role(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token lifetime in hours
    pub lifetime_hours: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, lifetime_hours: u64) -> Self {
        Self {
            secret: secret.into(),
            lifetime_hours,
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            lifetime_hours: 24,
        }
    }
}

/// Trait for token operations
pub trait TokenIssuer: Send + Sync + Debug {
    /// Issue a signed token for a user
    fn issue(&self, user: &User) -> Result<String, DomainError>;

    /// Verify a token and return its claims. Pure and side-effect-free.
    fn verify(&self, token: &str) -> Result<Claims, DomainError>;

    /// Configured token lifetime in hours
    fn lifetime_hours(&self) -> u64;
}

/// HS256 token service backed by a process-wide secret
#[derive(Clone)]
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("lifetime_hours", &self.config.lifetime_hours)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl TokenService {
    /// Create a new token service with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenIssuer for TokenService {
    fn issue(&self, user: &User) -> Result<String, DomainError> {
        let claims = Claims::new(user, self.config.lifetime_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign token: {}", e)))
    }

    fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| DomainError::invalid_token(e.to_string()))?;

        Ok(token_data.claims)
    }

    fn lifetime_hours(&self) -> u64 {
        self.config.lifetime_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new("ada", "ada@example.com", "hashed_password", None, None)
    }

    fn create_service() -> TokenService {
        TokenService::new(JwtConfig::new("test-secret-key-12345", 24))
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = create_service();
        let user = create_test_user();

        let token = service.issue(&user).unwrap();
        assert!(!token.is_empty());

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, user.id());
        assert_eq!(claims.name, "ada");
        assert_eq!(claims.role, UserRole::Standard);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_demo_role_travels_in_claims() {
        let service = create_service();
        let mut user = create_test_user();
        user.set_role(UserRole::Demo);

        let token = service.issue(&user).unwrap();
        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.role, UserRole::Demo);
    }

    #[test]
    fn test_malformed_token() {
        let service = create_service();

        assert!(service.verify("not-a-token").is_err());
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = TokenService::new(JwtConfig::new("secret-1", 24));
        let service2 = TokenService::new(JwtConfig::new("secret-2", 24));

        let token = service1.issue(&create_test_user()).unwrap();
        assert!(service2.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = TokenService::new(JwtConfig::new("test-secret", 24));
        let user = create_test_user();

        let past = Utc::now() - Duration::hours(1);
        let claims = Claims {
            sub: user.id(),
            name: user.name().to_string(),
            role: user.role(),
            iat: (past - Duration::hours(2)).timestamp(),
            exp: past.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_lifetime_hours() {
        let service = TokenService::new(JwtConfig::new("secret", 48));
        assert_eq!(service.lifetime_hours(), 48);
    }
}
