//! Application error type shared by all layers.
//!
//! Domain and storage failures are expressed as typed variants; the HTTP
//! layer maps each variant to a status code and a JSON body via
//! [`IntoResponse`]. Validation and uniqueness problems are always returned
//! as values, never panicked.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error envelope returned to HTTP clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

/// Machine-readable error code plus a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

/// All failure modes surfaced by the service core.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The target URL is empty, too long, or not a valid http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A user-supplied code violates the length or charset rules.
    #[error("invalid custom code: {0}")]
    InvalidCustomCode(String),

    /// A user-supplied code is already taken by another link.
    #[error("code '{0}' is already in use")]
    CodeInUse(String),

    /// The store rejected an insert because the code already exists.
    ///
    /// This is the race-detection backstop: the store's uniqueness
    /// constraint, not the generator's pre-check, is the source of truth.
    #[error("code '{0}' already exists")]
    DuplicateCode(String),

    /// Two creations raced on generated codes and the retry also collided.
    #[error("could not allocate a unique code, please retry")]
    TransientConflict,

    /// No link exists for the requested code.
    #[error("short link not found")]
    NotFound,

    /// The link exists but its expiry time has passed.
    #[error("short link has expired")]
    Expired,

    /// The generator exhausted its length growth ceiling.
    #[error("short code space exhausted")]
    CapacityExceeded,

    /// Any underlying storage fault.
    #[error("storage unavailable: {0}")]
    StoreUnavailable(String),
}

impl AppError {
    /// Stable machine-readable code for the HTTP envelope.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidUrl(_) => "invalid_url",
            AppError::InvalidCustomCode(_) => "invalid_custom_code",
            AppError::CodeInUse(_) => "code_in_use",
            AppError::DuplicateCode(_) => "duplicate_code",
            AppError::TransientConflict => "transient_conflict",
            AppError::NotFound => "not_found",
            AppError::Expired => "expired",
            AppError::CapacityExceeded => "capacity_exceeded",
            AppError::StoreUnavailable(_) => "store_unavailable",
        }
    }

    /// Converts the error into the serializable info block.
    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidUrl(_) | AppError::InvalidCustomCode(_) => StatusCode::BAD_REQUEST,
            AppError::CodeInUse(_) | AppError::DuplicateCode(_) => StatusCode::CONFLICT,
            AppError::TransientConflict => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Expired => StatusCode::GONE,
            AppError::CapacityExceeded => StatusCode::INSUFFICIENT_STORAGE,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}
