//! In-memory user store for local runs and tests.

use std::collections::HashMap;

use async_trait::async_trait;

use face_auth_core::domain::UserRecord;
use face_auth_core::error::StoreError;
use face_auth_core::ports::{RecordQuery, UserStore};

/// Fixed set of users keyed by email. Contents never change after construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.insert(
            email.into(),
            UserRecord {
                password: password.into(),
            },
        );
        self
    }
}

impl<E, P> FromIterator<(E, P)> for InMemoryUserStore
where
    E: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (E, P)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |store, (email, password)| {
                store.with_user(email, password)
            })
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_one(&self, query: &RecordQuery) -> Result<Option<UserRecord>, StoreError> {
        if query.table != RecordQuery::USERS_TABLE || query.field != "email" {
            return Err(StoreError::Query(format!(
                "unknown column {}.{}",
                query.table, query.field
            )));
        }

        Ok(self.users.get(&query.value).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_finds_seeded_user() {
        let store = InMemoryUserStore::new().with_user("a@b.com", "p@ss");

        let record = store
            .find_one(&RecordQuery::password_by_email("a@b.com"))
            .await
            .unwrap();

        assert_eq!(record.map(|r| r.password), Some("p@ss".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_email_is_none() {
        let store: InMemoryUserStore = [("a@b.com", "p@ss")].into_iter().collect();

        let record = store
            .find_one(&RecordQuery::password_by_email("z@b.com"))
            .await
            .unwrap();

        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_rejects_unknown_table() {
        let store = InMemoryUserStore::new();
        let query = RecordQuery {
            table: "profiles",
            ..RecordQuery::password_by_email("a@b.com")
        };

        assert!(matches!(
            store.find_one(&query).await,
            Err(StoreError::Query(_))
        ));
    }
}
