use std::env::VarError;

use crate::error::config::ConfigError;

/// Environment variable holding the `MySql` connection string.
///
/// Uses the same double-underscore section separator as `ConnectionStrings:MySql`
/// in layered configuration files.
pub static MYSQL_CONNECTION_STRING_VAR: &str = "ConnectionStrings__MySql";

/// Connection string value that selects the non-persistent in-memory substitute.
pub static IN_MEMORY_SENTINEL: &str = "InMemory";

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub mysql_connection_string: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mysql_connection_string = match std::env::var(MYSQL_CONNECTION_STRING_VAR) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: MYSQL_CONNECTION_STRING_VAR.to_string(),
                    reason: "value is not valid unicode".to_string(),
                })
            }
        };

        Ok(Self {
            mysql_connection_string,
        })
    }

    /// Configuration pointing at the in-memory substitute.
    pub fn in_memory() -> Self {
        Self::with_connection_string(IN_MEMORY_SENTINEL)
    }

    pub fn with_connection_string(connection_string: impl Into<String>) -> Self {
        Self {
            mysql_connection_string: Some(connection_string.into()),
        }
    }

    pub fn connection_string(&self) -> Option<&str> {
        self.mysql_connection_string.as_deref()
    }
}
