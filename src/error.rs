//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.
//! Page handlers translate missing authentication into redirects themselves;
//! everything that reaches this module is surfaced as a status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{auth::AuthError, services::backend::BackendError};

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Authentication Errors**: Missing or invalid session token
/// - **Upstream Errors**: Any failure calling the balances/history/transactions services
/// - **Validation Errors**: Invalid form data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Session token is missing or does not match the configured secret.
    ///
    /// Returns HTTP 401 Unauthorized (mutating endpoints only; page views
    /// redirect to the login page instead of producing this error).
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// An upstream bank service call failed.
    ///
    /// Returns HTTP 502 Bad Gateway. The upstream detail is logged but
    /// hidden from the browser.
    #[error("Upstream service error: {0}")]
    Upstream(#[from] BackendError),

    /// Request form data is invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Auth` → 401 Unauthorized
/// - `InvalidRequest` → 400 Bad Request
/// - `Upstream` → 502 Bad Gateway (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::Auth(_) => (
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Upstream(ref err) => {
                tracing::error!("upstream call failed: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_error",
                    "An upstream service error occurred".to_string(),
                )
            }
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
