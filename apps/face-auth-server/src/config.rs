//! Application configuration loaded from environment variables.
//!
//! Read once at startup; handlers never touch the environment.

use std::env;
use std::fmt;
use std::str::FromStr;

use face_auth_core::services::TokenIssuanceConfig;
use face_auth_infra::RestStoreConfig;

/// Which credential strategy the endpoint runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Sign and return a session token.
    #[default]
    Token,
    /// Return the stored password for the email.
    Lookup,
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "token" | "issue" => Ok(Self::Token),
            "lookup" | "password" => Ok(Self::Lookup),
            other => Err(format!("unknown auth strategy '{other}'")),
        }
    }
}

/// Backing store used by the lookup strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Rest,
    Postgres,
    Memory,
}

impl FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rest" | "supabase" => Ok(Self::Rest),
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown user store '{other}'")),
        }
    }
}

/// User store settings.
#[derive(Clone, Default)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub rest: RestStoreConfig,
    pub database_url: Option<String>,
    pub max_connections: u32,
    /// Seed users for the in-memory store, as `(email, password)` pairs.
    pub memory_users: Vec<(String, String)>,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("kind", &self.kind)
            .field("rest", &self.rest)
            .field("database_url", &self.database_url.as_ref().map(|_| "<hidden>"))
            .field("max_connections", &self.max_connections)
            .field("memory_users", &self.memory_users.len())
            .finish()
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub strategy: StrategyKind,
    pub token: TokenIssuanceConfig,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let store = StoreConfig {
            kind: parse_or_default("USER_STORE"),
            rest: RestStoreConfig {
                endpoint: non_empty("SUPABASE_URL"),
                service_key: non_empty("SUPABASE_SERVICE_ROLE_KEY"),
            },
            database_url: non_empty("DATABASE_URL"),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            memory_users: non_empty("MEMORY_USERS")
                .map(|raw| parse_memory_users(&raw))
                .unwrap_or_default(),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            strategy: parse_or_default("AUTH_STRATEGY"),
            token: TokenIssuanceConfig {
                secret: non_empty("JWT_SECRET"),
            },
            store,
        }
    }
}

/// Read a variable, treating an empty value as unset.
fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_or_default<T>(key: &str) -> T
where
    T: FromStr<Err = String> + Default,
{
    match non_empty(key).map(|v| v.parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            tracing::warn!("{key}: {e}, using default");
            T::default()
        }
        None => T::default(),
    }
}

/// Parse `MEMORY_USERS`.
/// Format: `<email>:<password>,<email>:<password>`
fn parse_memory_users(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|entry| entry.trim().split_once(':'))
        .filter(|(email, _)| !email.is_empty())
        .map(|(email, password)| (email.to_string(), password.to_string()))
        .collect()
}
