//! Domain entities - transient values that live for a single request.

mod claims;
mod outcome;
mod request;
mod user;

pub use claims::{TOKEN_TTL_SECONDS, TokenClaims};
pub use outcome::AuthOutcome;
pub use request::{AuthRequest, EMAIL_REQUIRED, NULL_BODY};
pub use user::UserRecord;
