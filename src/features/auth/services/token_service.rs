use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{TokenClaims, TokenUser};
use crate::features::auth::validator::JwtValidator;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

/// Signed token plus its lifetime in seconds
#[derive(Debug)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
}

/// Issues and verifies the HS256 bearer tokens handed out at login
pub struct TokenService {
    encoding_key: EncodingKey,
    validator: JwtValidator,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            validator: JwtValidator::new(&config.jwt_secret, config.jwt_leeway),
            ttl_secs: config.token_ttl.as_secs() as i64,
        }
    }

    pub fn issue(&self, user: TokenUser) -> Result<IssuedToken> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            user,
            iat: now,
            exp: now + self.ttl_secs,
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        tracing::debug!(
            "Issued token for user {} (expires in {}s)",
            claims.user.id,
            self.ttl_secs
        );

        Ok(IssuedToken {
            access_token,
            expires_in: self.ttl_secs,
        })
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims> {
        self.validator.validate_token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(secret: &str, ttl_secs: u64) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl: Duration::from_secs(ttl_secs),
            jwt_leeway: Duration::from_secs(0),
        }
    }

    fn token_user() -> TokenUser {
        TokenUser {
            id: 42,
            email: "owner@somosmas.org".to_string(),
            role_id: 2,
        }
    }

    #[test]
    fn test_issue_then_verify() {
        let service = TokenService::new(&config("secret", 3600));
        let issued = service.issue(token_user()).unwrap();
        assert_eq!(issued.expires_in, 3600);

        let claims = service.verify(&issued.access_token).unwrap();
        assert_eq!(claims.user, token_user());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuer = TokenService::new(&config("secret-a", 3600));
        let verifier = TokenService::new(&config("secret-b", 3600));
        let issued = issuer.issue(token_user()).unwrap();

        let err = verifier.verify(&issued.access_token).unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new(&config("secret", 3600));
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            user: token_user(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        match service.verify(&token) {
            Err(AppError::Auth(msg)) => assert_eq!(msg, "Token has expired"),
            other => panic!("expected expired token error, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = TokenService::new(&config("secret", 3600));
        assert!(matches!(
            service.verify("not-a-jwt"),
            Err(AppError::Auth(_))
        ));
    }
}
