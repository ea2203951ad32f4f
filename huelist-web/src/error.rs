/// Error handling for the web application
///
/// This module provides a unified error type that maps to HTML responses.
/// All handlers return `Result<T, PageError>` which converts to the right
/// HTTP status with a small rendered error page.
///
/// Validation and authentication failures never reach this type: they are
/// recovered locally in the handlers as flash notices plus a redirect.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use huelist_shared::auth::password::PasswordError;
use thiserror::Error;

use crate::views;

/// Result type alias for page handlers
pub type PageResult<T> = Result<T, PageError>;

/// Unified page error type
#[derive(Debug, Error)]
pub enum PageError {
    /// Requested record does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller may not mutate this record under the ownership policy (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Database failure (500)
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Session store failure (500)
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Password hashing failure (500)
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    /// Anything else that should never surface to the user (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => PageError::NotFound("Record not found".to_string()),
            other => PageError::Database(other),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PageError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            PageError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            PageError::Database(err) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            PageError::Session(err) => {
                tracing::error!("Session error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            PageError::Password(err) => {
                tracing::error!("Password error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            PageError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, views::error_page(status, &message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PageError::NotFound("no task with id 7".to_string());
        assert_eq!(err.to_string(), "Not found: no task with id 7");

        let err = PageError::Forbidden("task belongs to another user".to_string());
        assert_eq!(err.to_string(), "Forbidden: task belongs to another user");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = PageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, PageError::NotFound(_)));
    }

    #[test]
    fn test_not_found_response_status() {
        let response = PageError::NotFound("gone".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
