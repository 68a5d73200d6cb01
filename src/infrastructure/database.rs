//! MySQL connection provider.
//!
//! A [`ConnectionProvider`] is built once at process start and handed to
//! whatever needs the database. The pool behind it is created on first use
//! and lives as long as the provider; it is never closed explicitly.

use std::sync::OnceLock;

use sqlx::FromRow;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};

use crate::config::DatabaseConfig;

/// Upper bound on pooled connections. Callers past the limit wait for a free
/// connection rather than being rejected.
pub const POOL_MAX_CONNECTIONS: u32 = 10;

/// Session time zone, so timestamps are read and written as UTC.
const SESSION_TIME_ZONE: &str = "+00:00";

/// Lazily constructed, process-wide MySQL pool.
pub struct ConnectionProvider {
    config: DatabaseConfig,
    pool: OnceLock<MySqlPool>,
}

impl ConnectionProvider {
    /// Creates the provider. No connection is attempted until [`Self::pool`]
    /// is first called.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceLock::new(),
        }
    }

    /// Wraps a pool that was built elsewhere, such as a per-test database.
    pub fn with_pool(config: DatabaseConfig, pool: MySqlPool) -> Self {
        Self {
            config,
            pool: OnceLock::from(pool),
        }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns the shared pool, constructing it exactly once.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn pool(&self) -> &MySqlPool {
        self.pool.get_or_init(|| {
            tracing::info!(
                database = %self.config.masked_url(),
                max_connections = POOL_MAX_CONNECTIONS,
                "Creating MySQL connection pool"
            );

            MySqlPoolOptions::new()
                .max_connections(POOL_MAX_CONNECTIONS)
                .connect_lazy_with(self.connect_options())
        })
    }

    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .username(&self.config.user)
            .password(&self.config.password)
            .database(&self.config.database)
            .timezone(Some(SESSION_TIME_ZONE.to_string()))
    }

    /// Executes one parameterized statement and returns only its rows.
    ///
    /// `params` are bound positionally to the `?` placeholders in `sql`.
    ///
    /// # Errors
    ///
    /// Returns any connection, protocol, or decoding error from the driver.
    pub async fn query<T>(&self, sql: &str, params: &[i64]) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        let statement = params
            .iter()
            .fold(sqlx::query_as::<_, T>(sql), |statement, param| {
                statement.bind(*param)
            });

        statement.fetch_all(self.pool()).await
    }

    /// Reports the server version string, e.g. `8.0.36`.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached.
    pub async fn server_version(&self) -> Result<String, sqlx::Error> {
        sqlx::query_scalar("SELECT VERSION()")
            .fetch_one(self.pool())
            .await
    }
}
