use std::env;
use std::net::{IpAddr, SocketAddr};

use tracing::warn;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://test.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid HOST '{0}': {1}")]
    InvalidHost(String, std::net::AddrParseError),
    #[error("Invalid PORT '{0}': {1}")]
    InvalidPort(String, std::num::ParseIntError),
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    /// Bearer token demanded by routes marked `requires_auth`. `None` leaves
    /// those routes open.
    pub auth_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let host_raw = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let host = host_raw
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidHost(host_raw.clone(), e))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidPort(raw.clone(), e))?,
            Err(_) => DEFAULT_PORT,
        };

        let auth_token = env::var("AUTH_TOKEN").ok().filter(|t| !t.is_empty());
        if auth_token.is_none() {
            warn!("AUTH_TOKEN not set; routes marked requires_auth are not enforced");
        }

        Ok(Self {
            database_url,
            host,
            port,
            auth_token,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            auth_token: None,
        }
    }
}
