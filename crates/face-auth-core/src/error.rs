//! Domain-level error types.

use thiserror::Error;

use crate::ports::SignerError;

/// Authentication failures, classified by where they originate.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The request itself is unusable (missing email).
    #[error("{0}")]
    Validation(String),

    /// A required setting was absent when the request needed it.
    #[error("{0}")]
    Configuration(String),

    #[error("User not found")]
    NotFound,

    /// A collaborator (parser, signer, store) failed.
    #[error("{message}")]
    Downstream {
        message: String,
        details: Option<String>,
    },
}

impl AuthError {
    pub fn downstream(message: impl Into<String>, details: Option<String>) -> Self {
        Self::Downstream {
            message: message.into(),
            details,
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::downstream(
            err.to_string(),
            Some(format!("{:?} at line {} column {}", err.classify(), err.line(), err.column())),
        )
    }
}

impl From<SignerError> for AuthError {
    fn from(err: SignerError) -> Self {
        Self::downstream(err.to_string(), Some(format!("{err:?}")))
    }
}

/// User store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User store is not configured: {0}")]
    Misconfigured(String),

    #[error("User store connection failed: {0}")]
    Connection(String),

    #[error("User store query failed: {0}")]
    Query(String),
}
