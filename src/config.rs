use crate::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("APP_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "APP_PORT".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
        })
    }
}
