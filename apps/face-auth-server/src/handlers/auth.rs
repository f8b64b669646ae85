//! The face-auth function.

use actix_web::{HttpRequest, HttpResponse, web};

use face_auth_core::domain::AuthOutcome;
use face_auth_shared::dto::{PasswordResponse, TokenResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Largest request body read before the request is failed.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// ANY /functions/v1/face-auth
pub async fn face_auth(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: web::Payload,
) -> AppResult<HttpResponse> {
    tracing::info!(method = %req.method(), uri = %req.uri(), "Received request");

    // Read by hand so oversized or broken bodies still get a JSON error.
    let body = match payload.to_bytes_limited(MAX_BODY_BYTES).await {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => {
            return Err(AppError::Internal {
                message: "Failed to read request body".to_string(),
                details: Some(e.to_string()),
            });
        }
        Err(_) => {
            tracing::warn!(limit = MAX_BODY_BYTES, "Request body too large");
            return Err(AppError::Internal {
                message: format!("Request body exceeds {MAX_BODY_BYTES} bytes"),
                details: None,
            });
        }
    };

    let outcome = state.handler.handle(&body).await?;

    tracing::debug!(strategy = state.handler.strategy_name(), "Request authenticated");

    Ok(match outcome {
        AuthOutcome::Token(token) => HttpResponse::Ok().json(TokenResponse { token }),
        AuthOutcome::Password(password) => HttpResponse::Ok().json(PasswordResponse { password }),
    })
}
