use async_trait::async_trait;

use crate::domain::AuthOutcome;
use crate::error::AuthError;

/// How a validated email is turned into a response body.
///
/// Selected once at startup and injected into [`crate::AuthHandler`].
#[async_trait]
pub trait CredentialStrategy: Send + Sync {
    async fn authenticate(&self, email: &str) -> Result<AuthOutcome, AuthError>;

    /// Short name used in logs and the health endpoint.
    fn name(&self) -> &'static str;
}
