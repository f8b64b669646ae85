//! Request handler: parse, validate, authenticate.

use std::sync::Arc;

use crate::domain::{AuthOutcome, AuthRequest};
use crate::error::AuthError;
use crate::ports::CredentialStrategy;

/// Single endpoint handler, polymorphic over the injected strategy.
///
/// Every call performs at most one downstream call and ends in exactly one
/// outcome; there is no state shared between calls.
#[derive(Clone)]
pub struct AuthHandler {
    strategy: Arc<dyn CredentialStrategy>,
}

impl AuthHandler {
    pub fn new(strategy: Arc<dyn CredentialStrategy>) -> Self {
        Self { strategy }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Handle one raw JSON request body.
    pub async fn handle(&self, body: &[u8]) -> Result<AuthOutcome, AuthError> {
        let request = AuthRequest::from_json(body)?;
        self.strategy.authenticate(&request.email).await
    }
}
