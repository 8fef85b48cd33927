//! SurrealDB connection management.

use std::env;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::info;

/// Connection settings for the backing SurrealDB instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// WebSocket endpoint (e.g., `127.0.0.1:8000`).
    pub endpoint: String,
    /// SurrealDB namespace.
    pub namespace: String,
    /// SurrealDB database name.
    pub database: String,
    /// Root username for authentication.
    pub username: String,
    /// Root password for authentication.
    pub password: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            endpoint: "127.0.0.1:8000".into(),
            namespace: "userlens".into(),
            database: "main".into(),
            username: "root".into(),
            password: "root".into(),
        }
    }
}

impl DbConfig {
    /// Reads settings from `USERLENS_DB_*` environment variables.
    /// Any variable that is unset falls back to its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: get("USERLENS_DB_ENDPOINT").unwrap_or(defaults.endpoint),
            namespace: get("USERLENS_DB_NAMESPACE").unwrap_or(defaults.namespace),
            database: get("USERLENS_DB_DATABASE").unwrap_or(defaults.database),
            username: get("USERLENS_DB_USERNAME").unwrap_or(defaults.username),
            password: get("USERLENS_DB_PASSWORD").unwrap_or(defaults.password),
        }
    }
}

/// A live connection to SurrealDB with namespace and database
/// selected.
#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    /// Opens a WebSocket connection, signs in as root, and selects
    /// the configured namespace and database.
    pub async fn connect(config: &DbConfig) -> Result<Self, surrealdb::Error> {
        info!(
            endpoint = %config.endpoint,
            namespace = %config.namespace,
            database = %config.database,
            "Connecting to SurrealDB"
        );

        let db = Surreal::new::<Ws>(&config.endpoint).await?;

        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        info!("Connected to SurrealDB");

        Ok(Self { db })
    }

    /// Returns a reference to the underlying SurrealDB client.
    pub fn client(&self) -> &Surreal<Client> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_the_local_instance() {
        let config = DbConfig::default();
        assert_eq!(config.endpoint, "127.0.0.1:8000");
        assert_eq!(config.namespace, "userlens");
        assert_eq!(config.database, "main");
        assert_eq!(config.username, "root");
        assert_eq!(config.password, "root");
    }

    #[test]
    fn lookup_overrides_only_the_variables_that_are_set() {
        let config = DbConfig::from_lookup(|key| match key {
            "USERLENS_DB_ENDPOINT" => Some("db.internal:8000".into()),
            "USERLENS_DB_DATABASE" => Some("staging".into()),
            _ => None,
        });

        assert_eq!(config.endpoint, "db.internal:8000");
        assert_eq!(config.database, "staging");
        // Unset variables keep their defaults.
        assert_eq!(config.namespace, "userlens");
        assert_eq!(config.username, "root");
    }

    #[test]
    fn empty_lookup_matches_the_defaults() {
        assert_eq!(DbConfig::from_lookup(|_| None), DbConfig::default());
    }
}
