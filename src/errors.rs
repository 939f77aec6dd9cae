// errors.rs
use crate::regions::RegionSourceError;
use thiserror::Error;

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),
    #[error("{name} is not valid: {reason}")]
    Invalid { name: &'static str, reason: String },
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

/// Errors that stop the binary. The cache and adapter never produce these;
/// they only come from setup and from reading the input payload.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Region source setup failed: {0}")]
    RegionSource(#[from] RegionSourceError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
