use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::db::StoreError;
use crate::models::{FieldError, ValidationError};

/// Error type for HTTP handlers.
///
/// Every variant renders as JSON. Internal causes are logged and replaced by a
/// generic message before they reach the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A create body failed its field rules.
    #[error("{message}")]
    Validation {
        message: &'static str,
        #[source]
        source: ValidationError,
    },

    /// The body was not JSON of the expected shape.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Unauthorized(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a validation failure with the entity-specific headline.
    pub fn invalid(message: &'static str) -> impl FnOnce(ValidationError) -> AppError {
        move |source| AppError::Validation { message, source }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::MalformedBody(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation { message, source } => json!({
                "error": message,
                "details": source.details,
            }),
            AppError::MalformedBody(msg) => {
                let detail = FieldError {
                    field: "body".to_string(),
                    code: "malformed".to_string(),
                    message: msg.clone(),
                };
                json!({
                    "error": "Invalid request body",
                    "details": [detail],
                })
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Unauthorized(msg) => {
                json!({ "error": msg })
            }
            AppError::Store(e) => {
                tracing::error!(error = %e, "Storage error");
                json!({ "error": "Internal server error" })
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                json!({ "error": "Internal server error" })
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
