use serde_json::Value;

use crate::error::AuthError;

/// Error message returned when the request carries no usable email.
pub const EMAIL_REQUIRED: &str = "Email is required";

pub const NULL_BODY: &str = "Cannot read email from a null request body";

/// A validated authentication request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub email: String,
}

impl AuthRequest {
    /// Parse a raw request body and validate it.
    ///
    /// A body that is not valid JSON is a downstream failure, not a
    /// validation failure.
    pub fn from_json(body: &[u8]) -> Result<Self, AuthError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(&value)
    }

    /// Extract a truthy `email`. Only presence is checked.
    ///
    /// A `null` body cannot be destructured and fails as a downstream error.
    /// Any other non-object body simply has no email. Truthy values that are
    /// not strings are carried as their compact JSON text.
    pub fn from_value(value: &Value) -> Result<Self, AuthError> {
        if value.is_null() {
            return Err(AuthError::downstream(
                NULL_BODY,
                Some("expected a JSON object, found null".to_string()),
            ));
        }

        let email = match value.get("email") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::String(email)) => Some(email.clone()).filter(|e| !e.is_empty()),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
            Some(other) => Some(other.to_string()),
        };

        email
            .map(|email| Self { email })
            .ok_or_else(|| AuthError::Validation(EMAIL_REQUIRED.to_string()))
    }
}
