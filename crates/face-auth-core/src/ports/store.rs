use async_trait::async_trait;

use crate::domain::UserRecord;
use crate::error::StoreError;

/// A single-record lookup: one table, one equality filter, a column projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    pub table: &'static str,
    pub field: &'static str,
    pub value: String,
    pub projection: &'static [&'static str],
}

impl RecordQuery {
    pub const USERS_TABLE: &'static str = "users";

    /// `SELECT password FROM users WHERE email = $1 LIMIT 1`
    pub fn password_by_email(email: &str) -> Self {
        Self {
            table: Self::USERS_TABLE,
            field: "email",
            value: email.to_string(),
            projection: &["password"],
        }
    }
}

/// Read access to the user-record store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return at most one record matching `query`, or `None`.
    async fn find_one(&self, query: &RecordQuery) -> Result<Option<UserRecord>, StoreError>;
}
