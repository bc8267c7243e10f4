use std::env;

/// Process configuration, loaded once at startup and injected from there.
///
/// Nothing below this layer reads the environment; the auth middleware in
/// particular receives the shared secret through application state so tests
/// can exercise it without mutating the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub auth_token: String,
    pub port: u16,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),
}

const DEFAULT_PORT: u16 = 8080;

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let auth_token = env::var("API_TOKEN").map_err(|_| ConfigError::Missing("API_TOKEN"))?;
        let port = parse_port(env::var("PORT").ok());

        Ok(Self {
            database_url,
            auth_token,
            port,
        })
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_PORT)
}
