use std::path::PathBuf;

use serde::Deserialize;

use voyago_core::config::Config;

/// Auth service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Redis connection URL for the primary durable store. Env var: `REDIS_URL`.
    pub redis_url: String,
    /// Fallback file for session state when Redis is unreachable.
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
    /// Fallback file for the settings blob when Redis is unreachable.
    #[serde(default = "default_settings_file")]
    pub settings_file: PathBuf,
    /// TCP port for the HTTP server (default 3131). Env var: `AUTH_PORT`.
    #[serde(default = "default_port")]
    pub auth_port: u16,
}

fn default_session_file() -> PathBuf {
    PathBuf::from("voyago-session.json")
}

fn default_settings_file() -> PathBuf {
    PathBuf::from("voyago-settings.json")
}

fn default_port() -> u16 {
    3131
}

impl Config for AuthConfig {}
