//! Runtime configuration for the stats server.

use anyhow::Context;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Postgres connection string for the player collection.
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub server_addr: String,
    pub db_max_connections: u32,
    /// Deadline for the startup connect + ping. Queries have none.
    pub db_connect_timeout: Duration,
}

impl Settings {
    /// Read settings from the process environment. `DATABASE_URL` is the only
    /// required variable; bad numeric values fall back to their defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);

        let connect_secs = env::var("DB_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);

        Ok(Settings {
            database_url,
            server_addr,
            db_max_connections,
            db_connect_timeout: Duration::from_secs(connect_secs),
        })
    }
}
