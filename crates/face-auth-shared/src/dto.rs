//! Data Transfer Objects - request/response bodies of the auth endpoint.

use serde::{Deserialize, Serialize};

/// Body sent by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    pub email: String,
}

/// Successful token issuance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Successful credential lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResponse {
    pub password: String,
}
