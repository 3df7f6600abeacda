use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing secret: {0}")]
    MissingSecret(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
