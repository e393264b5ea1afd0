use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sawmill_core::error::CoreError;
use sawmill_core::order::EditError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain errors from `sawmill_core` and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON
/// error responses; nothing is silently swallowed.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error (missing entity, invalid name).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A lifecycle engine rejection.
    #[error(transparent)]
    Edit(#[from] EditError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::Edit(edit) => match edit {
                EditError::RestrictedFieldChange => (
                    StatusCode::CONFLICT,
                    "RESTRICTED_FIELD",
                    edit.to_string(),
                ),
                EditError::IncompletePromotionPrerequisites => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INCOMPLETE_ORDER",
                    edit.to_string(),
                ),
                // Should be prevented by only offering valid next-step
                // actions; reported generically when it surfaces.
                EditError::InvalidTransition { .. } => (
                    StatusCode::CONFLICT,
                    "INVALID_TRANSITION",
                    edit.to_string(),
                ),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - SQLite constraint violations (`1555` primary key, `2067` unique,
///   `787` foreign key) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if matches!(db_err.code().as_deref(), Some("1555") | Some("2067")) {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    "Duplicate value violates unique constraint".to_string(),
                );
            }
            if db_err.code().as_deref() == Some("787") {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    "Row is still referenced by other records".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
