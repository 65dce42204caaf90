use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_PORT: u16 = 2022;
const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,
    pub server_port: u16,

    /// Default tracing filter, overridden by `RUST_LOG` when set.
    pub log_level: String,
    /// Single allowed CORS origin. Any origin is allowed when unset.
    pub cors_allow_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let server_port = match std::env::var("SERVER_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "SERVER_PORT".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_SERVER_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            server_port,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            cors_allow_origin: std::env::var("CORS_ALLOW_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
        })
    }
}
