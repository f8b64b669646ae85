//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod signer;
mod store;
mod strategy;

pub use signer::{SignerError, TokenSigner};
pub use store::{RecordQuery, UserStore};
pub use strategy::CredentialStrategy;
