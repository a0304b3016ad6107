use std::net::AddrParseError;

use thiserror::Error;

/// The environment does not describe a usable server configuration.
///
/// Only raised at startup, before any request is served.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set to a SeaORM connection string")]
    MissingDatabaseUrl,
    #[error("BIND_ADDRESS {address:?} is not a socket address: {source}")]
    InvalidBindAddress {
        address: String,
        #[source]
        source: AddrParseError,
    },
}
