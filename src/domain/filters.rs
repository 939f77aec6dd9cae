// src/domain/filters.rs
use crate::domain::listing::{PropertyStatus, PropertyType};
use crate::regions::{RegionCache, RegionName};
use url::Url;

/// User-chosen search criteria, in frontend terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub region: Option<RegionName>,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
    /// Free-text search over title/description.
    pub query: Option<String>,
}

impl PropertyFilter {
    /// Backend query parameters, in a stable order.
    ///
    /// The region is sent as an id. If the cache doesn't know an id for the
    /// chosen region yet, the region criterion is dropped rather than sent
    /// as a name the backend can't match.
    pub fn to_query_pairs(&self, regions: &RegionCache) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(region) = self.region {
            if let Some(id) = regions.lookup_by_name(region) {
                pairs.push(("regionId".to_string(), id));
            }
        }
        if let Some(t) = self.property_type {
            pairs.push(("type".to_string(), t.backend_code().to_string()));
        }
        if let Some(s) = self.status {
            pairs.push(("status".to_string(), s.backend_code().to_string()));
        }

        let numbers = [
            ("minPrice", self.min_price),
            ("maxPrice", self.max_price),
            ("minArea", self.min_area),
            ("maxArea", self.max_area),
        ];
        for (key, value) in numbers {
            if let Some(v) = value.filter(|v| v.is_finite()) {
                pairs.push((key.to_string(), v.to_string()));
            }
        }

        if let Some(q) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            pairs.push(("search".to_string(), q.to_string()));
        }

        pairs
    }

    /// `GET {base}/properties?...`
    pub fn search_url(&self, base: &Url, regions: &RegionCache) -> Result<Url, url::ParseError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base.join("properties")?;
        let pairs = self.to_query_pairs(regions);
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}
