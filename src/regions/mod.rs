mod cache;
mod models;
mod registry;
mod source;
mod source_error;

pub use cache::{RegionCache, RegionCacheConfig};
pub use models::RegionRecord;
pub use registry::{RegionBackendCode, RegionName};
pub use source::{parse_region_list, regions_url, HttpRegionSource, RegionSource};
pub use source_error::RegionSourceError;
