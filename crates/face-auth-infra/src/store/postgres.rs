//! Direct PostgreSQL user store.

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectOptions, Database, DbConn, EntityTrait, FromQueryResult, QueryFilter,
    QuerySelect,
};

use face_auth_core::domain::UserRecord;
use face_auth_core::error::StoreError;
use face_auth_core::ports::{RecordQuery, UserStore};

use super::entity::user::{self, Entity as UserEntity};
use super::mask_email;

/// Configuration for the user database.
#[derive(Debug, Clone)]
pub struct PostgresStoreConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, FromQueryResult)]
struct PasswordRow {
    password: String,
}

/// User store reading the `users` table over a SeaORM connection pool.
pub struct PostgresUserStore {
    db: DbConn,
}

impl PostgresUserStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Open a connection pool from configuration.
    pub async fn connect(config: &PostgresStoreConfig) -> Result<Self, StoreError> {
        if config.url.is_empty() {
            return Err(StoreError::Misconfigured("DATABASE_URL is empty".to_string()));
        }

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(false)
            .to_owned();

        let db = Database::connect(opts)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        tracing::info!("User database connected (pool: {})", config.max_connections);

        Ok(Self::new(db))
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_one(&self, query: &RecordQuery) -> Result<Option<UserRecord>, StoreError> {
        if query.table != RecordQuery::USERS_TABLE
            || query.field != "email"
            || query.projection != ["password"]
        {
            return Err(StoreError::Query(format!(
                "unsupported query on {}.{}",
                query.table, query.field
            )));
        }

        tracing::debug!(user_email = %mask_email(&query.value), "Finding user by email");

        let row = UserEntity::find()
            .select_only()
            .column(user::Column::Password)
            .filter(user::Column::Email.eq(query.value.as_str()))
            .into_model::<PasswordRow>()
            .one(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(row.map(|r| UserRecord {
            password: r.password,
        }))
    }
}
