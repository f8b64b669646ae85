use serde::{Deserialize, Serialize};

/// Projection of a stored user row. Owned by the user store; read only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub password: String,
}
