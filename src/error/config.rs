use thiserror::Error;

/// Errors while loading application configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable '{0}'")]
    MissingEnvVar(String),

    /// An environment variable is set but not parseable.
    #[error("Invalid value for environment variable '{name}': {value}")]
    InvalidEnvVar { name: String, value: String },
}
