//! Sign-and-issue strategy.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{AuthOutcome, TokenClaims};
use crate::error::AuthError;
use crate::ports::{CredentialStrategy, TokenSigner};

pub const SECRET_NOT_SET: &str = "JWT_SECRET is not set";

/// Settings for token issuance.
#[derive(Clone, Default)]
pub struct TokenIssuanceConfig {
    /// HMAC signing key. `None` leaves the strategy misconfigured.
    pub secret: Option<String>,
}

impl fmt::Debug for TokenIssuanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuanceConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<hidden>"))
            .finish()
    }
}

/// Issues a signed session token for any validated email.
pub struct TokenIssuance {
    signer: Arc<dyn TokenSigner>,
    config: TokenIssuanceConfig,
}

impl TokenIssuance {
    pub fn new(signer: Arc<dyn TokenSigner>, config: TokenIssuanceConfig) -> Self {
        Self { signer, config }
    }

    pub fn has_secret(&self) -> bool {
        self.secret().is_ok()
    }

    fn secret(&self) -> Result<&str, AuthError> {
        self.config
            .secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AuthError::Configuration(SECRET_NOT_SET.to_string()))
    }

    /// Build claims relative to `now` and sign them.
    pub fn issue(&self, email: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let secret = self.secret()?;
        let claims = TokenClaims::for_email(email, now);
        Ok(self.signer.sign(&claims, secret)?)
    }
}

#[async_trait]
impl CredentialStrategy for TokenIssuance {
    async fn authenticate(&self, email: &str) -> Result<AuthOutcome, AuthError> {
        self.issue(email, Utc::now()).map(AuthOutcome::Token)
    }

    fn name(&self) -> &'static str {
        "token"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::ports::SignerError;

    /// Records what it was asked to sign and echoes it back.
    #[derive(Default)]
    struct RecordingSigner {
        signed: Mutex<Vec<(TokenClaims, String)>>,
    }

    impl TokenSigner for RecordingSigner {
        fn sign(&self, claims: &TokenClaims, secret: &str) -> Result<String, SignerError> {
            self.signed
                .lock()
                .unwrap()
                .push((claims.clone(), secret.to_string()));
            Ok(format!("{}.{}.sig", claims.sub, claims.exp))
        }

        fn verify(&self, _token: &str, _secret: &str) -> Result<TokenClaims, SignerError> {
            Err(SignerError::InvalidToken("not supported".to_string()))
        }
    }

    struct FailingSigner;

    impl TokenSigner for FailingSigner {
        fn sign(&self, _claims: &TokenClaims, _secret: &str) -> Result<String, SignerError> {
            Err(SignerError::Signing("key rejected".to_string()))
        }

        fn verify(&self, _token: &str, _secret: &str) -> Result<TokenClaims, SignerError> {
            Err(SignerError::InvalidToken("not supported".to_string()))
        }
    }

    fn config(secret: Option<&str>) -> TokenIssuanceConfig {
        TokenIssuanceConfig {
            secret: secret.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_issues_token_with_configured_secret() {
        let signer = Arc::new(RecordingSigner::default());
        let strategy = TokenIssuance::new(signer.clone(), config(Some("s3cr3t")));

        let outcome = strategy.authenticate("a@b.com").await.unwrap();

        assert!(matches!(outcome, AuthOutcome::Token(ref t) if t.starts_with("a@b.com.")));
        let signed = signer.signed.lock().unwrap();
        assert_eq!(signed.len(), 1);
        assert_eq!(signed[0].0.email, "a@b.com");
        assert_eq!(signed[0].1, "s3cr3t");
    }

    #[tokio::test]
    async fn test_expiry_is_one_hour_from_now() {
        let signer = Arc::new(RecordingSigner::default());
        let strategy = TokenIssuance::new(signer.clone(), config(Some("s3cr3t")));

        let before = Utc::now().timestamp();
        strategy.authenticate("a@b.com").await.unwrap();
        let after = Utc::now().timestamp();

        let exp = signer.signed.lock().unwrap()[0].0.exp;
        assert!(exp >= before + 3600 && exp <= after + 3600);
    }

    #[tokio::test]
    async fn test_missing_secret_is_configuration_error() {
        let signer = Arc::new(RecordingSigner::default());
        let strategy = TokenIssuance::new(signer.clone(), config(None));

        let err = strategy.authenticate("a@b.com").await.unwrap_err();

        assert!(matches!(err, AuthError::Configuration(ref msg) if msg == SECRET_NOT_SET));
        assert!(signer.signed.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_secret_counts_as_missing() {
        let strategy = TokenIssuance::new(Arc::new(RecordingSigner::default()), config(Some("")));

        assert!(!strategy.has_secret());
        assert!(matches!(
            strategy.issue("a@b.com", Utc::now()),
            Err(AuthError::Configuration(_))
        ));
    }

    #[test]
    fn test_signer_failure_is_downstream_error() {
        let strategy = TokenIssuance::new(Arc::new(FailingSigner), config(Some("s3cr3t")));

        let err = strategy.issue("a@b.com", Utc::now()).unwrap_err();

        assert!(matches!(
            err,
            AuthError::Downstream { ref message, .. } if message.contains("key rejected")
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", config(Some("s3cr3t")));
        assert!(!rendered.contains("s3cr3t"));
    }
}
