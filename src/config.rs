use std::str::FromStr;

use tracing::Level;
use url::Url;

use crate::error::config::ConfigError;

const DEFAULT_PORT: u16 = 8888;

/// Configuration read from the environment once at process start and passed
/// by reference to every component that needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub log_level: Level,
    pub database_url: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut missing = Vec::new();

        let database_host = mandatory_var("DATABASE_HOST", &mut missing);
        let database_port = mandatory_var("DATABASE_PORT", &mut missing);
        let database_name = mandatory_var("DATABASE_NAME", &mut missing);
        let database_user = mandatory_var("DATABASE_USER", &mut missing);
        let database_password = mandatory_var("DATABASE_PASSWORD", &mut missing);

        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let database_port: u16 = database_port.parse().map_err(ConfigError::InvalidPort)?;

        let port = match std::env::var("PORT") {
            Ok(port) => port.parse().map_err(ConfigError::InvalidPort)?,
            Err(_) => DEFAULT_PORT,
        };

        let log_level = match std::env::var("LOG_LEVEL") {
            Ok(level) => {
                Level::from_str(&level).map_err(|_| ConfigError::InvalidLogLevel(level))?
            }
            Err(_) => Level::INFO,
        };

        let database_url = Url::parse(&format!(
            "postgres://{database_user}:{database_password}@{database_host}:{database_port}/{database_name}"
        ))?;

        Ok(Self {
            port,
            log_level,
            database_url,
        })
    }
}

fn mandatory_var(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            tracing::warn!("{name} not set in environment");
            missing.push(name);
            String::new()
        }
    }
}
