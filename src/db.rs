//! Database connection helpers.
//!
//! This module owns the lifecycle of the Diesel connection pool backing the
//! business entity registry: opening the pool, acquiring scoped connections
//! and describing the connection target without leaking credentials.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::define_sql_function;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use log::{error, info};
use serde::Deserialize;
use url::Url;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

define_sql_function! {
    /// Unicode lower-casing, registered on every pooled connection.
    ///
    /// SQLite's built-in `lower` and `LIKE` only fold ASCII letters.
    fn fold_case(x: Text) -> Text;
}

/// Sizing and timeout settings for the registry connection pool.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum number of pooled connections.
    pub max_size: u32,
    /// Seconds an idle connection may stay open before it is closed.
    pub idle_timeout_secs: u64,
    /// Seconds to wait for a free connection before giving up.
    pub connection_timeout_secs: u64,
    /// Seconds SQLite waits on a locked database file.
    pub busy_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: 20,
            idle_timeout_secs: 30,
            connection_timeout_secs: 10,
            busy_timeout_secs: 30,
        }
    }
}

#[derive(Debug)]
/// Options that are applied each time a connection is acquired from the pool.
pub struct ConnectionOptions {
    /// Timeout to wait for a locked database.
    pub busy_timeout: Option<Duration>,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        (|| {
            if let Some(d) = self.busy_timeout {
                conn.batch_execute(&format!("PRAGMA busy_timeout = {};", d.as_millis()))?;
            }
            fold_case_utils::register_impl(conn, |x: String| x.to_lowercase())?;
            Ok(())
        })()
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a Diesel connection pool for the given database URL.
///
/// Fails when the first connection cannot be established, so a
/// misconfigured store surfaces at startup rather than on the first search.
pub fn establish_connection_pool(
    database_url: &str,
    config: &PoolConfig,
) -> Result<DbPool, PoolError> {
    let target = describe_database_url(database_url);
    info!("Database connection: {target}");

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(config.max_size)
        .idle_timeout(Some(Duration::from_secs(config.idle_timeout_secs)))
        .connection_timeout(Duration::from_secs(config.connection_timeout_secs))
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: Some(Duration::from_secs(config.busy_timeout_secs)),
        }))
        .build(manager)
        .inspect_err(|e| error!("Failed to open database pool for {target}: {e}"))
}

/// Retrieve a connection from the pool
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    match pool.get() {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Failed to get connection from pool: {e}");
            Err(e)
        }
    }
}

/// Connection parameters that are safe to print.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// Network URL, reduced to its non-secret parts.
    Remote {
        host: Option<String>,
        port: Option<u16>,
        database: String,
        user: Option<String>,
    },
    /// Local database file.
    File(String),
    /// Input that could not be parsed; nothing of it is shown.
    Unparsed,
}

impl Display for DatabaseTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseTarget::Remote {
                host,
                port,
                database,
                user,
            } => {
                write!(f, "host={}", host.as_deref().unwrap_or("-"))?;
                if let Some(port) = port {
                    write!(f, " port={port}")?;
                }
                write!(f, " database={database}")?;
                if let Some(user) = user {
                    write!(f, " user={user}")?;
                }
                Ok(())
            }
            DatabaseTarget::File(path) => write!(f, "database={path}"),
            DatabaseTarget::Unparsed => write!(f, "database=<unparsed url>"),
        }
    }
}

/// Describes the connection target for logs. The password is never read.
///
/// Strings without `:` or `@` cannot carry credentials and are reported as
/// file paths; any other input that fails to parse is hidden entirely.
pub fn describe_database_url(database_url: &str) -> DatabaseTarget {
    match Url::parse(database_url) {
        Ok(url) => DatabaseTarget::Remote {
            host: url.host_str().map(str::to_string),
            port: url.port(),
            database: url.path().trim_start_matches('/').to_string(),
            user: Some(url.username())
                .filter(|u| !u.is_empty())
                .map(str::to_string),
        },
        Err(_) if !database_url.contains([':', '@']) => {
            DatabaseTarget::File(database_url.to_string())
        }
        Err(_) => DatabaseTarget::Unparsed,
    }
}
