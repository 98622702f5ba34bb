// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    notify_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://cakeshop.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_notify_timeout() -> u64 {
    5
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates what must parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let notify_timeout_secs = match env::var("NOTIFY_TIMEOUT_SECONDS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ConfigError::Invalid("NOTIFY_TIMEOUT_SECONDS must be an integer".into())
            })?,
            Err(_) => default_notify_timeout(),
        };
        if notify_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "NOTIFY_TIMEOUT_SECONDS must be positive".into(),
            ));
        }

        Ok(Self {
            database_url,
            listen_addr,
            notify_timeout: Duration::from_secs(notify_timeout_secs),
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Upper bound on a single notification delivery attempt.
    pub fn notify_timeout(&self) -> Duration {
        self.notify_timeout
    }
}
