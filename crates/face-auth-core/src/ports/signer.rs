//! Token signing port.

use crate::domain::TokenClaims;

/// Produces signed, verifiable tokens from a claims payload.
///
/// Implementations sign with header `{"alg":"HS256","typ":"JWT"}`.
pub trait TokenSigner: Send + Sync {
    /// Sign `claims` with `secret`. Fails when the secret is empty.
    fn sign(&self, claims: &TokenClaims, secret: &str) -> Result<String, SignerError>;

    /// Check the signature and expiry of `token` and return its claims.
    fn verify(&self, token: &str, secret: &str) -> Result<TokenClaims, SignerError>;
}

/// Signing errors.
#[derive(Debug, thiserror::Error)]
pub enum SignerError {
    #[error("Signing secret is empty")]
    EmptySecret,

    #[error("Failed to sign token: {0}")]
    Signing(String),

    #[error("Token expired")]
    Expired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}
