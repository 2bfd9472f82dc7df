//! Integration test for admin token issuing and validation.
//!
//! Tokens are minted locally with the same HS256 secret the server would use,
//! then validated through `validate_token`. No running server is needed.
//!
//! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use std::time::Duration;

use techfinalyear_backend::auth::jwt::{AdminClaims, issue_token, validate_token};

/// A fake secret for testing. Never use the real one in tests committed to git.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

/// Helper: sign arbitrary claims with HS256 using the test secret.
fn mint(claims: &AdminClaims, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode test JWT")
}

#[test]
fn test_issued_token_decodes_correctly() {
    let token = issue_token(TEST_SECRET, Duration::from_secs(4 * 3600)).unwrap();

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.role, "admin");
    assert!(claims.is_admin());
    let iat = claims.iat.unwrap();
    assert_eq!(claims.exp - iat, 4 * 3600);
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;

    let claims = AdminClaims {
        role: "admin".to_string(),
        exp: now - 300, // expired 5 minutes ago (well past the 60s default leeway)
        iat: Some(now - 3600),
    };

    let result = validate_token(&mint(&claims, TEST_SECRET), TEST_SECRET);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("ExpiredSignature"));
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = issue_token(TEST_SECRET, Duration::from_secs(3600)).unwrap();

    let result = validate_token(&token, "completely-wrong-secret-xxxxxxxxxxxxxxxxxxx");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("InvalidSignature"));
}

#[test]
fn test_non_admin_role_is_rejected() {
    let now = Utc::now().timestamp() as usize;

    let claims = AdminClaims {
        role: "student".to_string(),
        exp: now + 3600,
        iat: Some(now),
    };

    let result = validate_token(&mint(&claims, TEST_SECRET), TEST_SECRET);
    assert!(result.is_err());
}

#[test]
fn test_garbage_token_is_rejected() {
    let result = validate_token("not.a.valid.jwt", TEST_SECRET);
    assert!(result.is_err());
}
