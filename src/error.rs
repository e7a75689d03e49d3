use axum::extract::rejection::JsonRejection;
use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::config;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid body: {0}")]
    Json(#[from] JsonRejection),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// Internal detail is only exposed when the debug flag is on.
fn database_error_message(e: &sqlx::Error, debug: bool) -> String {
    if debug {
        format!("Database error: {e}")
    } else {
        "Database error occurred".to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            // Malformed and mis-shaped bodies alike are validation failures.
            AppError::Json(rejection) => {
                (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
            }
            AppError::Database(e) => {
                error!("database error: {}", e);
                let message = database_error_message(&e, config::settings().debug);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::database_error_message;

    #[test]
    fn database_detail_is_gated_by_debug_flag() {
        let err = sqlx::Error::PoolClosed;

        let message = database_error_message(&err, false);
        assert_eq!(message, "Database error occurred");

        let message = database_error_message(&err, true);
        assert!(message.contains(&err.to_string()));
    }
}
