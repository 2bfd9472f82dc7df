use actix_web::http::header::Header;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use futures_util::future::{Ready, ready};
use std::time::Duration;

use crate::auth::jwt::{self, AdminClaims};
use crate::error::AppError;

/// Cookie the admin token is stored in after login.
pub const ADMIN_COOKIE: &str = "admin_token";

/// Admin credentials kept in Actix app data.
#[derive(Clone)]
pub struct AdminKeys {
    pub password: Option<String>,
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

/// Extractor for requests carrying a valid admin token.
///
/// The token is read from the `admin_token` cookie first, then from an
/// `Authorization: Bearer` header.
pub struct AdminSession(pub AdminClaims);

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(AdminSession).map_err(Error::from))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AdminClaims, AppError> {
    let keys = req
        .app_data::<web::Data<AdminKeys>>()
        .ok_or_else(|| AppError::Internal("Admin keys not configured".to_string()))?;

    let token = req
        .cookie(ADMIN_COOKIE)
        .map(|c| c.value().to_string())
        .or_else(|| {
            Authorization::<Bearer>::parse(req)
                .ok()
                .map(|auth| auth.into_scheme().token().to_string())
        })
        .ok_or(AppError::Unauthorized("Unauthorized"))?;

    jwt::validate_token(&token, &keys.jwt_secret).map_err(|e| {
        tracing::debug!(error = %e, "Rejected admin token");
        AppError::Unauthorized("Unauthorized")
    })
}
