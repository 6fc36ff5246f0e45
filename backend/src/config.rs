use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const ADDR_VAR: &str = "BIRTHDAY_UNIVERSE_ADDR";
pub const STATIC_DIR_VAR: &str = "BIRTHDAY_UNIVERSE_STATIC_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a socket address like 127.0.0.1:3000, got {value:?}")]
    InvalidAddr { var: &'static str, value: String },
}

/// Where the server listens and which directory holds the built frontend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("../frontend/dist"),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `BIRTHDAY_UNIVERSE_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(dir) = lookup(STATIC_DIR_VAR).filter(|dir| !dir.is_empty()) {
            config.static_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
