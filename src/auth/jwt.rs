use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The only role a token is ever issued for.
pub const ADMIN_ROLE: &str = "admin";

/// Claims carried by an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Always `"admin"` for tokens minted by [`issue_token`].
    pub role: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
}

impl AdminClaims {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Mint an HS256 admin token valid for `ttl`.
pub fn issue_token(secret: &str, ttl: Duration) -> Result<String, String> {
    let now = Utc::now().timestamp() as usize;

    let claims = AdminClaims {
        role: ADMIN_ROLE.to_string(),
        exp: now + ttl.as_secs() as usize,
        iat: Some(now),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| format!("Failed to sign token: {e:?}"))
}

/// Validate an HS256 admin token and return its claims.
///
/// Rejects bad signatures, expired tokens and tokens whose role is not admin.
pub fn validate_token(token: &str, secret: &str) -> Result<AdminClaims, String> {
    let validation = Validation::new(Algorithm::HS256);

    let data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("Token validation failed: {:?}", e.kind()))?;

    if !data.claims.is_admin() {
        return Err("Token role is not admin".to_string());
    }

    Ok(data.claims)
}
