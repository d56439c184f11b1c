use axum::http::header::WWW_AUTHENTICATE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use folio_core::error::{CoreError, FieldErrors};
use folio_db::StoreError;
use serde_json::json;

/// Body of every 404 response.
pub const NOT_FOUND_DETAIL: &str = "Not found.";

const INTERNAL_DETAIL: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
/// validation failures use `{status: "error", errors: {...}}`, everything
/// else `{detail: "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request (unparseable body or query string).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => AppError::Core(core),
            StoreError::Database(db) => AppError::Database(db),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => not_found(),
                CoreError::Validation(errors) => validation_failed(&errors),
                CoreError::Conflict(msg) => detail(StatusCode::CONFLICT, &msg),
                CoreError::Unauthorized(msg) => {
                    let mut response = detail(StatusCode::UNAUTHORIZED, &msg);
                    response
                        .headers_mut()
                        .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                    response
                }
                CoreError::SlugExhausted { base } => {
                    tracing::error!(base = %base, "Slug candidates exhausted");
                    detail(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    detail(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL)
                }
            },

            AppError::Database(err) => classify_sqlx_error(&err),

            AppError::BadRequest(msg) => {
                validation_failed(&FieldErrors::single("non_field_errors", msg))
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                detail(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL)
            }
        }
    }
}

/// The canonical 404 response, also served for unknown routes.
pub fn not_found() -> Response {
    detail(StatusCode::NOT_FOUND, NOT_FOUND_DETAIL)
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(json!({ "detail": message }))).into_response()
}

fn validation_failed(errors: &FieldErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({ "status": "error", "errors": errors })),
    )
        .into_response()
}

/// Classify a sqlx error into a response.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> Response {
    match err {
        sqlx::Error::RowNotFound => not_found(),
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = folio_db::error::unique_violation(err) {
                if constraint.starts_with("uq_") {
                    return detail(
                        StatusCode::CONFLICT,
                        &format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            detail(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL)
        }
        other => {
            tracing::error!(error = %other, "Database error");
            detail(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_DETAIL)
        }
    }
}
