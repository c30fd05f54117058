/**
 * Bearer Token Issuance and Verification
 *
 * This module handles JWT creation and validation. The signing secret is
 * always passed in by the caller - configuration owns it and injects it
 * through application state, so there is no hidden process-global read
 * anywhere in here.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID this token was issued for
    pub sub: String,
    /// Email at issuance time
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs()
}

/// Create a signed token for a user
///
/// # Arguments
/// * `secret` - HMAC signing secret (injected from configuration)
/// * `user_id` - User ID placed in the `sub` claim
/// * `email` - User email
/// * `ttl` - Token lifetime
///
/// # Returns
/// Encoded JWT string
pub fn create_token(
    secret: &str,
    user_id: uuid::Uuid,
    email: String,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user_id.to_string(),
        email,
        exp: now + ttl.as_secs(),
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token
///
/// Verification checks the signature and the `exp` claim. Any failure
/// (malformed token, bad signature, expired) is returned as an error;
/// callers decide how much of it to surface.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}
