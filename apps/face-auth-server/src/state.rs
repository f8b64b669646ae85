//! Application state - shared across all handlers.

use std::sync::Arc;

use async_trait::async_trait;

use face_auth_core::AuthHandler;
use face_auth_core::domain::UserRecord;
use face_auth_core::error::StoreError;
use face_auth_core::ports::{CredentialStrategy, RecordQuery, UserStore};
use face_auth_core::services::{CredentialLookup, TokenIssuance};
use face_auth_infra::{InMemoryUserStore, JwtSigner, RestUserStore};

#[cfg(feature = "postgres")]
use face_auth_infra::{PostgresStoreConfig, PostgresUserStore};

use crate::config::{AppConfig, StoreConfig, StoreKind, StrategyKind};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub handler: AuthHandler,
}

/// Stands in for a store that could not be built at startup.
///
/// Every query fails with the startup error, so the endpoint keeps answering
/// instead of the process refusing to boot.
pub struct UnavailableUserStore {
    reason: String,
    misconfigured: bool,
}

impl UnavailableUserStore {
    pub fn from_error(err: &StoreError) -> Self {
        let reason = match err {
            StoreError::Misconfigured(msg)
            | StoreError::Connection(msg)
            | StoreError::Query(msg) => msg.clone(),
        };

        Self {
            reason,
            misconfigured: matches!(err, StoreError::Misconfigured(_)),
        }
    }
}

#[async_trait]
impl UserStore for UnavailableUserStore {
    async fn find_one(&self, _query: &RecordQuery) -> Result<Option<UserRecord>, StoreError> {
        if self.misconfigured {
            Err(StoreError::Misconfigured(self.reason.clone()))
        } else {
            Err(StoreError::Connection(self.reason.clone()))
        }
    }
}

impl AppState {
    /// Build the application state with the configured strategy.
    pub async fn new(config: &AppConfig) -> Self {
        let strategy: Arc<dyn CredentialStrategy> = match config.strategy {
            StrategyKind::Token => {
                let issuance =
                    TokenIssuance::new(Arc::new(JwtSigner::new()), config.token.clone());
                if issuance.has_secret() {
                    tracing::info!("JWT_SECRET exists: true");
                } else {
                    tracing::error!("JWT_SECRET is not set. Token requests will fail with 500.");
                }
                Arc::new(issuance)
            }
            StrategyKind::Lookup => {
                Arc::new(CredentialLookup::new(build_store(&config.store).await))
            }
        };

        let state = Self::with_strategy(strategy);
        tracing::info!(
            strategy = state.handler.strategy_name(),
            "Application state initialized"
        );
        state
    }

    pub fn with_strategy(strategy: Arc<dyn CredentialStrategy>) -> Self {
        Self {
            handler: AuthHandler::new(strategy),
        }
    }
}

async fn build_store(config: &StoreConfig) -> Arc<dyn UserStore> {
    let store: Result<Arc<dyn UserStore>, StoreError> = match config.kind {
        StoreKind::Rest => {
            RestUserStore::new(&config.rest).map(|s| Arc::new(s) as Arc<dyn UserStore>)
        }
        StoreKind::Postgres => connect_postgres(config).await,
        StoreKind::Memory => {
            tracing::warn!(
                users = config.memory_users.len(),
                "Using in-memory user store"
            );
            Ok(Arc::new(
                config.memory_users.iter().cloned().collect::<InMemoryUserStore>(),
            ))
        }
    };

    store.unwrap_or_else(|e| {
        tracing::error!("Failed to initialize user store: {}. Lookups will fail.", e);
        Arc::new(UnavailableUserStore::from_error(&e))
    })
}

#[cfg(feature = "postgres")]
async fn connect_postgres(config: &StoreConfig) -> Result<Arc<dyn UserStore>, StoreError> {
    let url = config
        .database_url
        .clone()
        .ok_or_else(|| StoreError::Misconfigured("DATABASE_URL is not set".to_string()))?;

    let store = PostgresUserStore::connect(&PostgresStoreConfig {
        url,
        max_connections: config.max_connections,
        min_connections: 1,
    })
    .await?;

    Ok(Arc::new(store))
}

#[cfg(not(feature = "postgres"))]
async fn connect_postgres(_config: &StoreConfig) -> Result<Arc<dyn UserStore>, StoreError> {
    Err(StoreError::Misconfigured(
        "built without the postgres feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use face_auth_core::AuthError;

    use super::*;

    fn config(strategy: StrategyKind, store: StoreConfig) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            strategy,
            token: Default::default(),
            store,
        }
    }

    #[actix_web::test]
    async fn test_token_strategy_selected() {
        let state = AppState::new(&config(StrategyKind::Token, StoreConfig::default())).await;
        assert_eq!(state.handler.strategy_name(), "token");
    }

    #[actix_web::test]
    async fn test_memory_store_serves_seeded_users() {
        let store = StoreConfig {
            kind: StoreKind::Memory,
            memory_users: vec![("a@b.com".to_string(), "p@ss".to_string())],
            ..Default::default()
        };
        let state = AppState::new(&config(StrategyKind::Lookup, store)).await;

        let outcome = state.handler.handle(br#"{"email":"a@b.com"}"#).await.unwrap();

        assert_eq!(
            outcome,
            face_auth_core::domain::AuthOutcome::Password("p@ss".to_string())
        );
    }

    #[actix_web::test]
    async fn test_unconfigured_rest_store_fails_as_configuration() {
        let state = AppState::new(&config(StrategyKind::Lookup, StoreConfig::default())).await;

        let err = state.handler.handle(br#"{"email":"a@b.com"}"#).await.unwrap_err();

        assert!(matches!(err, AuthError::Configuration(ref m) if m.contains("supabaseUrl")));
    }

    #[actix_web::test]
    async fn test_unreachable_store_reads_as_not_found() {
        let store = Arc::new(UnavailableUserStore::from_error(&StoreError::Connection(
            "refused".to_string(),
        )));
        let state = AppState::with_strategy(Arc::new(CredentialLookup::new(store)));

        let err = state.handler.handle(br#"{"email":"a@b.com"}"#).await.unwrap_err();

        assert!(matches!(err, AuthError::NotFound));
    }
}
