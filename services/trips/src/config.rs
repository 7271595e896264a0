use serde::Deserialize;

use voyago_core::config::Config;

/// Trips service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct TripsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3132). Env var: `TRIPS_PORT`.
    #[serde(default = "default_port")]
    pub trips_port: u16,
}

fn default_port() -> u16 {
    3132
}

impl Config for TripsConfig {}
