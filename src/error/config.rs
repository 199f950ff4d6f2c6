use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing connection string {0}; set it to a MySQL URL or to \"InMemory\"")]
    MissingConnectionString(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
