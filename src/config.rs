// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".into()
}

impl AppConfig {
    /// Build configuration from environment variables. The listen address
    /// falls back to the template's fixed port 3000 when nothing is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        if listen_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "LISTEN_ADDR must be a host:port pair, got {listen_addr:?}"
            )));
        }

        Ok(Self { listen_addr })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }
}
