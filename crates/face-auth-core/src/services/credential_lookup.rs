//! Lookup-and-return strategy.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::AuthOutcome;
use crate::error::{AuthError, StoreError};
use crate::ports::{CredentialStrategy, RecordQuery, UserStore};

/// Returns the stored password for an email.
///
/// The stored value is returned unmodified and the caller is not
/// authenticated. Kept for wire compatibility with existing clients.
pub struct CredentialLookup {
    store: Arc<dyn UserStore>,
}

impl CredentialLookup {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CredentialStrategy for CredentialLookup {
    async fn authenticate(&self, email: &str) -> Result<AuthOutcome, AuthError> {
        let query = RecordQuery::password_by_email(email);

        match self.store.find_one(&query).await {
            Ok(Some(record)) => Ok(AuthOutcome::Password(record.password)),
            Ok(None) => Err(AuthError::NotFound),
            Err(StoreError::Misconfigured(msg)) => Err(AuthError::Configuration(msg)),
            // Query and connection failures surface as a missing user.
            Err(_) => Err(AuthError::NotFound),
        }
    }

    fn name(&self) -> &'static str {
        "lookup"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::domain::UserRecord;

    #[derive(Default)]
    struct FakeStore {
        users: HashMap<String, String>,
        queries: Mutex<Vec<RecordQuery>>,
    }

    impl FakeStore {
        fn with_user(mut self, email: &str, password: &str) -> Self {
            self.users.insert(email.to_string(), password.to_string());
            self
        }
    }

    #[async_trait]
    impl UserStore for FakeStore {
        async fn find_one(&self, query: &RecordQuery) -> Result<Option<UserRecord>, StoreError> {
            self.queries.lock().unwrap().push(query.clone());
            Ok(self.users.get(&query.value).map(|password| UserRecord {
                password: password.clone(),
            }))
        }
    }

    struct BrokenStore(fn() -> StoreError);

    #[async_trait]
    impl UserStore for BrokenStore {
        async fn find_one(&self, _query: &RecordQuery) -> Result<Option<UserRecord>, StoreError> {
            Err((self.0)())
        }
    }

    #[tokio::test]
    async fn test_returns_stored_password_unmodified() {
        let store = Arc::new(FakeStore::default().with_user("a@b.com", "p@ss"));
        let strategy = CredentialLookup::new(store.clone());

        let outcome = strategy.authenticate("a@b.com").await.unwrap();

        assert_eq!(outcome, AuthOutcome::Password("p@ss".to_string()));
    }

    #[tokio::test]
    async fn test_queries_users_by_email_for_password_only() {
        let store = Arc::new(FakeStore::default());
        let strategy = CredentialLookup::new(store.clone());

        let _ = strategy.authenticate("a@b.com").await;

        let queries = store.queries.lock().unwrap();
        assert_eq!(queries.as_slice(), &[RecordQuery::password_by_email("a@b.com")]);
        assert_eq!(queries[0].table, "users");
        assert_eq!(queries[0].field, "email");
        assert_eq!(queries[0].projection, &["password"]);
    }

    #[tokio::test]
    async fn test_unknown_email_is_not_found() {
        let strategy = CredentialLookup::new(Arc::new(FakeStore::default()));

        let err = strategy.authenticate("nobody@b.com").await.unwrap_err();

        assert!(matches!(err, AuthError::NotFound));
    }

    #[tokio::test]
    async fn test_query_failure_is_not_found() {
        let strategy = CredentialLookup::new(Arc::new(BrokenStore(|| {
            StoreError::Query("relation \"users\" does not exist".to_string())
        })));

        let err = strategy.authenticate("a@b.com").await.unwrap_err();

        assert!(matches!(err, AuthError::NotFound));
    }

    #[tokio::test]
    async fn test_misconfigured_store_is_configuration_error() {
        let strategy = CredentialLookup::new(Arc::new(BrokenStore(|| {
            StoreError::Misconfigured("SUPABASE_URL is not set".to_string())
        })));

        let err = strategy.authenticate("a@b.com").await.unwrap_err();

        assert!(matches!(err, AuthError::Configuration(ref msg) if msg.contains("SUPABASE_URL")));
    }

    #[tokio::test]
    async fn test_repeated_lookup_is_stable() {
        let strategy =
            CredentialLookup::new(Arc::new(FakeStore::default().with_user("a@b.com", "p@ss")));

        let first = strategy.authenticate("a@b.com").await.unwrap();
        let second = strategy.authenticate("a@b.com").await.unwrap();

        assert_eq!(first, second);
    }
}
