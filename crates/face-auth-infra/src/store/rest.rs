//! PostgREST-style HTTP user store (a Supabase project's REST endpoint).

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Request, Url, header};

use face_auth_core::domain::UserRecord;
use face_auth_core::error::StoreError;
use face_auth_core::ports::{RecordQuery, UserStore};

use super::mask_email;

/// Connection settings for the REST store.
#[derive(Clone, Default)]
pub struct RestStoreConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub endpoint: Option<String>,
    /// Privileged service credential, sent as `apikey` and bearer token.
    pub service_key: Option<String>,
}

impl fmt::Debug for RestStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestStoreConfig")
            .field("endpoint", &self.endpoint)
            .field("service_key", &self.service_key.as_ref().map(|_| "<hidden>"))
            .finish()
    }
}

/// User store backed by `GET {endpoint}/rest/v1/{table}`, expecting at most one row.
pub struct RestUserStore {
    client: Client,
    endpoint: Url,
    service_key: String,
}

impl RestUserStore {
    pub fn new(config: &RestStoreConfig) -> Result<Self, StoreError> {
        let endpoint = config
            .endpoint
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| StoreError::Misconfigured("supabaseUrl is required.".to_string()))?;
        let service_key = config
            .service_key
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| StoreError::Misconfigured("supabaseKey is required.".to_string()))?;

        // Url::join replaces the last segment unless the base ends in '/'.
        let endpoint = if endpoint.ends_with('/') {
            endpoint.to_string()
        } else {
            format!("{endpoint}/")
        };
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| StoreError::Misconfigured(format!("Invalid supabaseUrl: {e}")))?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            service_key: service_key.to_string(),
        })
    }

    /// Build the HTTP request for `query` without sending it.
    ///
    /// No row limit is sent so that a non-unique match can be detected.
    pub fn build_request(&self, query: &RecordQuery) -> Result<Request, StoreError> {
        let url = self
            .endpoint
            .join(&format!("rest/v1/{}", query.table))
            .map_err(|e| StoreError::Query(e.to_string()))?;

        self.client
            .get(url)
            .query(&[
                ("select", query.projection.join(",")),
                (query.field, format!("eq.{}", query.value)),
            ])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header(header::ACCEPT, "application/json")
            .build()
            .map_err(|e| StoreError::Query(e.to_string()))
    }
}

#[async_trait]
impl UserStore for RestUserStore {
    async fn find_one(&self, query: &RecordQuery) -> Result<Option<UserRecord>, StoreError> {
        tracing::debug!(
            table = query.table,
            value = %mask_email(&query.value),
            "Querying REST user store"
        );

        let request = self.build_request(query)?;
        let response = self.client.execute(request).await.map_err(|e| {
            tracing::warn!(error = %e, "REST user store unreachable");
            StoreError::Connection(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %body, "REST user store rejected query");
            return Err(StoreError::Query(format!("{status}: {body}")));
        }

        let rows: Vec<UserRecord> = response
            .json()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        if rows.len() > 1 {
            tracing::warn!(rows = rows.len(), "REST user store matched more than one row");
            return Err(StoreError::Query(format!(
                "expected a single row, found {}",
                rows.len()
            )));
        }

        Ok(rows.into_iter().next())
    }
}
