use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifetime of an issued token, in seconds.
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// Claims embedded in an issued session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims for `email`, expiring one hour after `now`.
    pub fn for_email(email: &str, now: DateTime<Utc>) -> Self {
        Self {
            sub: email.to_string(),
            email: email.to_string(),
            exp: now.timestamp() + TOKEN_TTL_SECONDS,
        }
    }
}
