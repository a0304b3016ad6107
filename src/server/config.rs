use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DATABASE_URL: &str = "DATABASE_URL";
static BIND_ADDRESS: &str = "BIND_ADDRESS";

/// Server configuration read from the environment.
pub struct Config {
    /// SeaORM connection string, e.g. `sqlite://bugbase.db?mode=rwc` or a PostgreSQL URL.
    pub database_url: String,
    /// Address the HTTP listener binds to, `127.0.0.1:8080` unless `BIND_ADDRESS` is set.
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingDatabaseUrl)` - `DATABASE_URL` is unset or empty
    /// - `Err(ConfigError::InvalidBindAddress)` - `BIND_ADDRESS` is not a socket address
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let bind_address = match lookup(BIND_ADDRESS) {
            Some(address) => address
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddress { address, source })?,
            None => SocketAddr::from(([127, 0, 0, 1], 8080)),
        };

        Ok(Self {
            database_url,
            bind_address,
        })
    }
}
