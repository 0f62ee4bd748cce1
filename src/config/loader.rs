//! Load [`AppConfig`] from environment variables.

use super::{
    AppConfig, DatabaseTarget, Environment, DEFAULT_BIND_ADDR, DEFAULT_DATABASE_URL, DEFAULT_FRONTEND_URL,
    DEFAULT_MAX_CONNECTIONS,
};
use crate::error::ConfigError;
use crate::suggest::DEFAULT_BASE_URL;

impl AppConfig {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let environment = get("ENV").map(|v| Environment::parse(&v)).unwrap_or(Environment::Development);
        let frontend_url = get("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.into());
        if axum::http::HeaderValue::from_str(&frontend_url).is_err() {
            return Err(ConfigError::InvalidVar {
                var: "FRONTEND_URL",
                reason: "not a valid header value".into(),
            });
        }

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let database = if database_url.eq_ignore_ascii_case("memory") {
            DatabaseTarget::Memory
        } else {
            let max_connections = match get("DATABASE_MAX_CONNECTIONS") {
                Some(v) => v.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| ConfigError::InvalidVar {
                    var: "DATABASE_MAX_CONNECTIONS",
                    reason: format!("expected a positive integer, got '{}'", v),
                })?,
                None => DEFAULT_MAX_CONNECTIONS,
            };
            DatabaseTarget::Postgres {
                url: database_url,
                max_connections,
            }
        };

        let bind = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind.parse().map_err(|_| ConfigError::InvalidVar {
            var: "BIND_ADDR",
            reason: format!("expected host:port, got '{}'", bind),
        })?;

        Ok(AppConfig {
            environment,
            frontend_url,
            database,
            ai_base_url: get("AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            groq_api_key: get("GROQ_API_KEY"),
            bind_addr,
        })
    }
}
