//! HS256 JWT signer.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use face_auth_core::domain::TokenClaims;
use face_auth_core::ports::{SignerError, TokenSigner};

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    exp: i64,
}

impl From<&TokenClaims> for Claims {
    fn from(claims: &TokenClaims) -> Self {
        Self {
            sub: claims.sub.clone(),
            email: claims.email.clone(),
            exp: claims.exp,
        }
    }
}

impl From<Claims> for TokenClaims {
    fn from(claims: Claims) -> Self {
        Self {
            sub: claims.sub,
            email: claims.email,
            exp: claims.exp,
        }
    }
}

/// Signs claims with a shared HMAC secret. Holds no key material itself.
#[derive(Debug, Clone)]
pub struct JwtSigner {
    header: Header,
}

impl JwtSigner {
    pub fn new() -> Self {
        Self {
            header: Header {
                typ: Some("JWT".to_string()),
                ..Header::new(Algorithm::HS256)
            },
        }
    }
}

impl Default for JwtSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self, claims: &TokenClaims, secret: &str) -> Result<String, SignerError> {
        if secret.is_empty() {
            return Err(SignerError::EmptySecret);
        }

        encode(
            &self.header,
            &Claims::from(claims),
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| SignerError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str, secret: &str) -> Result<TokenClaims, SignerError> {
        if secret.is_empty() {
            return Err(SignerError::EmptySecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => SignerError::Expired,
            _ => SignerError::InvalidToken(e.to_string()),
        })?;

        Ok(token_data.claims.into())
    }
}
