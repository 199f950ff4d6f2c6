//! Database context.
//!
//! [`DbContext`] owns the choice of storage backend and hands out the database
//! connection every repository and service works against. The backend is
//! resolved lazily: nothing is contacted until the first call to
//! [`DbContext::connection`], and any failure at that point is returned to the
//! caller of that operation.
//!
//! A context is meant to be created per logical operation and used from one task
//! at a time. Rows written through its connection are visible to later reads
//! issued through the same context.

use std::fmt;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, FromQueryResult, Schema,
    Statement,
};
use tokio::sync::OnceCell;

use crate::{
    config::{Config, IN_MEMORY_SENTINEL, MYSQL_CONNECTION_STRING_VAR},
    error::{config::ConfigError, context::ContextError, Error},
    seed::{self, SeedReport},
};

/// Connection URL of the private, non-persistent in-memory substitute.
static IN_MEMORY_URL: &str = "sqlite::memory:";

/// Storage backend selected from the `MySql` connection string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    /// A real MySQL-compatible server reachable at the given connection string.
    MySql(String),
    /// The connection string is the `InMemory` sentinel.
    InMemory,
    /// No connection string, or an empty one.
    Missing,
    /// A connection handed to [`DbContext::with_connection`]; no configuration involved.
    Injected,
}

impl Backend {
    /// Applies the backend selection policy to a raw connection string.
    ///
    /// The sentinel comparison ignores ASCII case, so `inmemory` and `INMEMORY`
    /// also select [`Backend::InMemory`]. Only [`Backend::MySql`] ever leads to
    /// external connectivity.
    pub fn from_connection_string(connection_string: Option<&str>) -> Self {
        match connection_string {
            None => Backend::Missing,
            Some(value) if value.is_empty() => Backend::Missing,
            Some(value) if value.eq_ignore_ascii_case(IN_MEMORY_SENTINEL) => Backend::InMemory,
            Some(value) => Backend::MySql(value.to_string()),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Backend::MySql(_))
    }
}

/// Names the backend without echoing the connection string, which may carry credentials.
impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::MySql(_) => f.write_str("mysql"),
            Backend::InMemory => f.write_str("in-memory"),
            Backend::Missing => f.write_str("unconfigured"),
            Backend::Injected => f.write_str("injected"),
        }
    }
}

/// Server family reported by `SELECT VERSION()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerFlavor {
    MySql,
    MariaDb,
}

/// Version of the MySQL-compatible server the context connected to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServerVersion {
    pub flavor: ServerFlavor,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ServerVersion {
    /// Parses the string returned by `SELECT VERSION()`.
    ///
    /// Handles plain MySQL versions (`8.0.36`, `8.0.36-0ubuntu0.22.04.1`) and MariaDB
    /// versions, including the `5.5.5-` prefix MariaDB reports over the MySQL
    /// protocol (`5.5.5-10.11.6-MariaDB-1:10.11.6+maria~ubu2204`).
    pub fn parse(raw: &str) -> Result<Self, ContextError> {
        let flavor = if raw.to_ascii_lowercase().contains("mariadb") {
            ServerFlavor::MariaDb
        } else {
            ServerFlavor::MySql
        };

        let version = match flavor {
            ServerFlavor::MariaDb => raw.strip_prefix("5.5.5-").unwrap_or(raw),
            ServerFlavor::MySql => raw,
        };
        let numeric = version
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .next()
            .unwrap_or_default();

        let mut parts = numeric.split('.').map(str::parse::<u32>);
        let major = match parts.next() {
            Some(Ok(major)) => major,
            _ => return Err(ContextError::ServerVersion(raw.to_string())),
        };
        let minor = parts.next().and_then(Result::ok).unwrap_or(0);
        let patch = parts.next().and_then(Result::ok).unwrap_or(0);

        Ok(Self {
            flavor,
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flavor = match self.flavor {
            ServerFlavor::MySql => "mysql",
            ServerFlavor::MariaDb => "mariadb",
        };
        write!(f, "{}.{}.{}-{}", self.major, self.minor, self.patch, flavor)
    }
}

#[derive(FromQueryResult)]
struct VersionRow {
    version: String,
}

/// Gateway to the persisted administrator and vehicle collections.
pub struct DbContext {
    // None when the connection was injected
    config: Option<Config>,
    connection: OnceCell<DatabaseConnection>,
}

impl DbContext {
    /// Creates a context whose backend is resolved from `config` on first use.
    pub fn new(config: Config) -> Self {
        Self {
            config: Some(config),
            connection: OnceCell::new(),
        }
    }

    /// Creates a context that is already configured with `db`.
    ///
    /// No configuration is read; [`DbContext::backend`] reports [`Backend::Injected`].
    pub fn with_connection(db: DatabaseConnection) -> Self {
        Self {
            config: None,
            connection: OnceCell::from(db),
        }
    }

    /// Returns `true` once a connection has been injected or resolved.
    pub fn is_configured(&self) -> bool {
        self.connection.initialized()
    }

    /// The backend this context uses, or will use on first resolution.
    pub fn backend(&self) -> Backend {
        match &self.config {
            Some(config) => Backend::from_connection_string(config.connection_string()),
            None => Backend::Injected,
        }
    }

    /// Returns the connection, resolving the backend on first use.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Injected or freshly resolved connection
    /// - `Err(Error::ConfigError)` - No connection string configured and none injected
    /// - `Err(Error::ContextError)` - Server unreachable, malformed connection string, or
    ///   unparseable server version
    pub async fn connection(&self) -> Result<&DatabaseConnection, Error> {
        self.connection.get_or_try_init(|| self.configure()).await
    }

    /// Creates any missing tables from the entity definitions and applies the seed dataset.
    ///
    /// Safe to call repeatedly; existing tables and rows are left untouched.
    pub async fn ensure_created(&self) -> Result<SeedReport, Error> {
        let db = self.connection().await?;

        let schema = Schema::new(db.get_database_backend());
        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::Administrator),
            schema.create_table_from_entity(entity::prelude::Vehicle),
        ];

        for mut stmt in stmts {
            stmt.if_not_exists();
            db.execute(&stmt).await?;
        }

        seed::apply(db).await
    }

    async fn configure(&self) -> Result<DatabaseConnection, Error> {
        match self.backend() {
            Backend::MySql(connection_string) => connect_to_server(&connection_string).await,
            Backend::InMemory => {
                tracing::info!("Using in-memory database; no external server will be contacted");

                let mut opt = ConnectOptions::new(IN_MEMORY_URL);
                opt.sqlx_logging(false);

                let db = Database::connect(opt)
                    .await
                    .map_err(ContextError::Connectivity)?;

                Ok(db)
            }
            // Injected contexts never reach this point; their cell is already set
            Backend::Missing | Backend::Injected => Err(ConfigError::MissingConnectionString(
                MYSQL_CONNECTION_STRING_VAR.to_string(),
            )
            .into()),
        }
    }
}

impl From<DatabaseConnection> for DbContext {
    fn from(db: DatabaseConnection) -> Self {
        Self::with_connection(db)
    }
}

async fn connect_to_server(connection_string: &str) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(connection_string);
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .map_err(ContextError::Connectivity)?;

    let version = detect_server_version(&db).await?;
    tracing::info!("Connected to database server {}", version);

    Ok(db)
}

/// Asks the connected server for its version.
pub async fn detect_server_version(db: &DatabaseConnection) -> Result<ServerVersion, Error> {
    let stmt = Statement::from_string(db.get_database_backend(), "SELECT VERSION() AS version");

    let row = VersionRow::find_by_statement(stmt)
        .one(db)
        .await
        .map_err(ContextError::Connectivity)?
        .ok_or_else(|| ContextError::ServerVersion("no version row returned".to_string()))?;

    Ok(ServerVersion::parse(&row.version)?)
}
