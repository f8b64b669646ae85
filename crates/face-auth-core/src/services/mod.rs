//! Credential strategies.

mod credential_lookup;
mod token_issuance;

pub use credential_lookup::CredentialLookup;
pub use token_issuance::{SECRET_NOT_SET, TokenIssuance, TokenIssuanceConfig};
