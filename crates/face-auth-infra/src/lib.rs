//! # Face Auth Infrastructure
//!
//! Concrete implementations of the ports defined in `face-auth-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - direct PostgreSQL user store via SeaORM

pub mod signer;
pub mod store;

pub use signer::JwtSigner;
pub use store::{InMemoryUserStore, RestStoreConfig, RestUserStore, mask_email};

#[cfg(feature = "postgres")]
pub use store::{PostgresStoreConfig, PostgresUserStore};
