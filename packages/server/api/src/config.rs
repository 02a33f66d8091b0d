use anyhow::{Context, Result};
use axum::http::HeaderValue;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};

/// Runtime settings, read from flags or the environment (`.env` is loaded first).
#[derive(Debug, Clone, Parser)]
#[command(name = "risk-register-api", version, about = "GRC risk assessment API")]
pub struct Config {
    /// SQLite database location
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://risks.db")]
    pub database_url: String,

    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Origins allowed to call the API from a browser
    #[arg(
        long,
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://localhost:5173"
    )]
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn cors_origin_values(&self) -> Result<Vec<HeaderValue>> {
        self.cors_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{}'", origin))
            })
            .collect()
    }
}
