// config.rs
use crate::errors::ConfigError;
use crate::regions::RegionCacheConfig;
use std::time::Duration;
use url::Url;

const DEFAULT_TTL_HOURS: u64 = 24;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Marketplace backend base URL, e.g. "https://api.example.com/api".
    pub api_url: Url,
    /// Bearer token sent to the backend, if any.
    pub api_token: Option<String>,
    pub http_timeout: Duration,
    pub cache: RegionCacheConfig,
    /// Fallback level when RUST_LOG is unset.
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value lookup (tests pass a map instead of the env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("MARKETPLACE_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("MARKETPLACE_API_URL"))?;

        let api_url = Url::parse(raw_url.trim()).map_err(|e| ConfigError::Invalid {
            name: "MARKETPLACE_API_URL",
            reason: e.to_string(),
        })?;

        let api_token = lookup("MARKETPLACE_API_TOKEN")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let ttl_hours = parse_u64(&lookup, "REGION_CACHE_TTL_HOURS", DEFAULT_TTL_HOURS)?;
        let timeout_secs =
            parse_u64(&lookup, "MARKETPLACE_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "MARKETPLACE_HTTP_TIMEOUT_SECS",
                reason: "must be greater than zero".into(),
            });
        }

        let log_level = lookup("LOG_LEVEL")
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "info".to_string());

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::Invalid {
                name: "LOG_LEVEL",
                reason: format!("expected one of {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(Self {
            api_url,
            api_token,
            http_timeout: Duration::from_secs(timeout_secs),
            cache: RegionCacheConfig {
                ttl: Duration::from_secs(ttl_hours.saturating_mul(60 * 60)),
            },
            log_level,
        })
    }
}

fn parse_u64<F>(lookup: &F, name: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
            name,
            reason: format!("{e} (got {raw:?})"),
        }),
    }
}
