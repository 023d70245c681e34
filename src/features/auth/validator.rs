use super::model::TokenClaims;
use crate::core::error::AppError;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use std::time::Duration;

/// Verifies HS256 tokens signed with the shared secret.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn new(secret: &str, leeway: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway.as_secs();
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected token: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => AppError::Auth("Token has expired".to_string()),
                    ErrorKind::InvalidSignature => {
                        AppError::Auth("Invalid token signature".to_string())
                    }
                    _ => AppError::Auth("Invalid token".to_string()),
                }
            })
    }
}
