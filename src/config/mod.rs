// Configuration module entry point
// Fixed server settings, assembled from compiled-in defaults only

mod types;

use std::net::SocketAddr;

pub use types::{Config, ServerConfig};

/// Address every variant listens on
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port every variant listens on
pub const DEFAULT_PORT: u16 = 8000;

impl Config {
    /// Load the fixed configuration.
    ///
    /// No file, environment variable or flag is consulted: the listening
    /// address is part of each variant's observable contract.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let settings = ::config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
