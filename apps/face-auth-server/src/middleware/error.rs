//! Error handling - maps classified auth errors to HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use face_auth_core::AuthError;
use face_auth_shared::ErrorResponse;
use std::fmt;

/// Application-level error type. Carries only what the response needs.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal {
        message: String,
        details: Option<String>,
    },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal { message, .. } => write!(f, "Internal error: {}", message),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => ErrorResponse::new(msg),
            // Diagnostic details are exposed to the caller as-is.
            AppError::Internal { message, details } => {
                ErrorResponse::new(message).with_details(details.clone())
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(msg) => AppError::BadRequest(msg),
            AuthError::NotFound => AppError::NotFound(AuthError::NotFound.to_string()),
            AuthError::Configuration(msg) => {
                tracing::error!(kind = "configuration", "Misconfiguration: {}", msg);
                AppError::Internal {
                    message: msg,
                    details: None,
                }
            }
            AuthError::Downstream { message, details } => {
                tracing::error!(
                    kind = "downstream",
                    details = ?details,
                    "Error in face-auth function: {}",
                    message
                );
                AppError::Internal { message, details }
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(err: AppError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_validation_maps_to_400() {
        let err = AppError::from(AuthError::Validation("Email is required".to_string()));

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(err).await,
            serde_json::json!({"error": "Email is required"})
        );
    }

    #[actix_web::test]
    async fn test_not_found_maps_to_404() {
        let err = AppError::from(AuthError::NotFound);

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(err).await,
            serde_json::json!({"error": "User not found"})
        );
    }

    #[actix_web::test]
    async fn test_configuration_maps_to_500_without_details() {
        let err =
            AppError::from(AuthError::Configuration("JWT_SECRET is not set".to_string()));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(err).await,
            serde_json::json!({"error": "JWT_SECRET is not set"})
        );
    }

    #[actix_web::test]
    async fn test_downstream_exposes_details() {
        let err = AppError::from(AuthError::downstream(
            "expected value",
            Some("Syntax at line 1 column 1".to_string()),
        ));

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(err).await,
            serde_json::json!({"error": "expected value", "details": "Syntax at line 1 column 1"})
        );
    }
}
