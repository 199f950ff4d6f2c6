use thiserror::Error;

/// Failures while resolving the database backend on first use.
#[derive(Error, Debug)]
pub enum ContextError {
    /// The server could not be reached, or the connection string could not be used.
    #[error("Failed to connect to database: {0}")]
    Connectivity(#[source] sea_orm::DbErr),
    /// The server answered `SELECT VERSION()` with something we could not parse.
    #[error("Failed to detect database server version: {0}")]
    ServerVersion(String),
}
