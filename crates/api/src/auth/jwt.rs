//! JWT access-token issuing and verification.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. There is no
//! server-side session state: verification recomputes the signature with the
//! shared secret, and a token expires only through its `exp` claim. Rotating
//! the secret invalidates every outstanding token at once.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{env_or, ConfigError};

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The name the caller logged in with.
    pub username: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for JWT token generation and validation.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in hours (default: 24).
    pub expiry_hours: i64,
}

/// Default access token expiry in hours.
const DEFAULT_EXPIRY_HOURS: i64 = 24;

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiry_hours", &self.expiry_hours)
            .finish()
    }
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var            | Required | Default |
    /// |--------------------|----------|---------|
    /// | `JWT_SECRET`       | **yes**  | --      |
    /// | `JWT_EXPIRY_HOURS` | no       | `24`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let expiry_hours: i64 = env_or("JWT_EXPIRY_HOURS", DEFAULT_EXPIRY_HOURS)?;
        if expiry_hours <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRY_HOURS",
                value: expiry_hours.to_string(),
                reason: "must be positive".into(),
            });
        }

        Ok(Self {
            secret,
            expiry_hours,
        })
    }
}

/// Issue an HS256 access token for `username`.
pub fn issue_token(
    username: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.expiry_hours * 3600;

    let claims = Claims {
        username: username.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify a token and return its [`Claims`].
///
/// Rejects a bad signature, an `exp` in the past (no leeway), and any header
/// algorithm other than HS256.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
