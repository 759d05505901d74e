use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is invalid")]
    Invalid,

    #[error("failed to issue token: {0}")]
    Issue(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AppError::Unauthorized("Token has expired".into()),
            TokenError::Invalid => AppError::Unauthorized("Invalid token".into()),
            TokenError::Issue(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Issues and validates HS256 access tokens whose subject is a username.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a token for `subject` using the configured lifetime.
    pub fn issue_default(&self, subject: &str) -> Result<String, TokenError> {
        self.issue(subject, self.ttl)
    }

    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(ttl)
            .ok_or_else(|| TokenError::Issue("Failed to set expiration".into()))?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp().max(0) as usize,
            exp: expiration.timestamp().max(0) as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Issue(e.to_string()))
    }

    /// Verify signature and expiry, returning the subject claim.
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let decoded = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        Ok(decoded.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", Duration::minutes(30))
    }

    #[test]
    fn fresh_token_validates_to_subject() {
        let issuer = issuer();
        let token = issuer.issue_default("alice").expect("issue");
        assert_eq!(issuer.validate(&token).expect("validate"), "alice");
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = issuer();
        let token = issuer
            .issue("alice", Duration::seconds(-30))
            .expect("issue");
        assert!(matches!(issuer.validate(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = TokenIssuer::new("another-secret", Duration::minutes(30));
        let token = other.issue_default("alice").expect("issue");
        assert!(matches!(issuer().validate(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn tampered_token_is_rejected() {
        let issuer = issuer();
        let mut token = issuer.issue_default("alice").expect("issue");
        token.push('x');
        assert!(matches!(issuer.validate(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(
            issuer().validate("not.a.jwt"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn token_errors_surface_as_unauthorized() {
        let err: AppError = TokenError::Expired.into();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
