//! # Face Auth Core
//!
//! The domain layer of the face-auth service.
//! Request validation, claims construction and the two credential strategies
//! live here with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod handler;
pub mod ports;
pub mod services;

pub use error::AuthError;
pub use handler::AuthHandler;
