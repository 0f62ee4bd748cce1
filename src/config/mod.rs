//! Service configuration, read from the environment at startup.

pub mod loader;

use std::net::SocketAddr;

pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5500";
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/recipes";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Deployment mode. Production hides the interactive API docs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Only `production` (any case) selects production.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn docs_enabled(self) -> bool {
        self != Environment::Production
    }
}

/// Where recipes live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatabaseTarget {
    Postgres { url: String, max_connections: u32 },
    /// `DATABASE_URL=memory`: process-local, lost on exit.
    Memory,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: Environment,
    /// Single origin allowed by CORS.
    pub frontend_url: String,
    pub database: DatabaseTarget,
    pub ai_base_url: String,
    pub groq_api_key: Option<String>,
    pub bind_addr: SocketAddr,
}
