use thiserror::Error;

/// Failures while fetching the remote region list. These never escape the
/// cache; `RegionCache::ensure_fresh` logs them and keeps its current table.
#[derive(Debug, Error)]
pub enum RegionSourceError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Region API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
}
