//! Token signer implementations.

mod jwt;

pub use jwt::JwtSigner;
