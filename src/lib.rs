pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod regions;

pub use config::AppConfig;
pub use domain::{adapt_properties, adapt_property, BackendProperty, Property, PropertyFilter};
pub use errors::{AppError, ConfigError};
pub use regions::{RegionCache, RegionCacheConfig, RegionName, RegionSource};

#[cfg(test)]
mod tests;
