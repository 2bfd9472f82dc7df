use actix_web::cookie::{Cookie, SameSite, time};
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::jwt;
use crate::auth::middleware::{ADMIN_COOKIE, AdminKeys, AdminSession};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Deserialize)]
pub struct AdminLogin {
    #[serde(default)]
    pub password: String,
}

/// POST /api/admin/login — trade the admin password for a session token.
///
/// The token is returned in the body and set as an HttpOnly cookie.
pub async fn login(
    keys: web::Data<AdminKeys>,
    body: web::Json<AdminLogin>,
) -> AppResult<HttpResponse> {
    let Some(expected) = keys.password.as_deref() else {
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "ADMIN_PASSWORD not configured on server",
        })));
    };

    if !passwords_match(&body.password, expected) {
        tracing::warn!("Admin login rejected");
        return Err(AppError::Unauthorized("Invalid password"));
    }

    let token = jwt::issue_token(&keys.jwt_secret, keys.token_ttl).map_err(AppError::Internal)?;

    let cookie = Cookie::build(ADMIN_COOKIE, token.clone())
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(keys.token_ttl.as_secs() as i64))
        .finish();

    tracing::info!("Admin logged in");
    Ok(HttpResponse::Ok().cookie(cookie).json(serde_json::json!({
        "success": true,
        "token": token,
    })))
}

/// GET /api/admin/me — 200 when the caller holds a valid admin token.
pub async fn me(admin: AdminSession) -> HttpResponse {
    let AdminSession(claims) = admin;
    HttpResponse::Ok().json(serde_json::json!({
        "admin": true,
        "role": claims.role,
        "expiresAt": claims.exp,
    }))
}

/// Constant-time over the password bytes. Only the length can leak.
fn passwords_match(given: &str, expected: &str) -> bool {
    let (given, expected) = (given.as_bytes(), expected.as_bytes());
    if given.len() != expected.len() {
        return false;
    }
    given
        .iter()
        .zip(expected)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
