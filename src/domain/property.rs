// src/domain/property.rs

use crate::domain::backend::{BackendProperty, BackendUser};
use crate::domain::listing::{PropertyStatus, PropertyType};
use crate::regions::{RegionCache, RegionName};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A property as the marketplace displays it.
/// This acts as an anti-corruption layer between the backend payload and the pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: Option<String>,

    pub price: f64,
    pub area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_meter: Option<i64>,
    pub rooms: Option<u32>,
    pub floor: Option<i32>,
    pub total_floors: Option<i32>,
    pub address: Option<String>,

    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,

    pub region: RegionName,
    pub region_id: Option<String>,

    pub images: Vec<String>,
    pub features: Vec<String>,
    pub views: u64,

    pub user_id: String,
    pub owner: Option<PropertyOwner>,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyOwner {
    pub id: String,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl From<&BackendUser> for PropertyOwner {
    fn from(user: &BackendUser) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
        }
    }
}

impl Property {
    /// Project a backend payload into a display record.
    ///
    /// The only side effect: an embedded region relation is registered in
    /// `regions`, so later lookups by id don't need a refresh.
    pub fn from_backend(backend: &BackendProperty, regions: &RegionCache) -> Self {
        let (region, region_id) = resolve_region(backend, regions);

        Property {
            id: backend.id.clone(),
            title: backend.title.clone(),
            description: backend.description.clone(),
            price: backend.price,
            area: backend.area,
            price_per_meter: price_per_meter(backend.price, backend.area),
            rooms: backend.rooms,
            floor: backend.floor,
            total_floors: backend.total_floors,
            address: backend.address.clone(),
            property_type: PropertyType::from_backend(&backend.property_type),
            status: PropertyStatus::from_backend(&backend.status),
            region,
            region_id,
            images: backend.images.clone().unwrap_or_default(),
            features: backend.features.clone().unwrap_or_default(),
            views: backend.views.unwrap_or(0),
            user_id: backend.user_id.clone(),
            owner: backend.user.as_ref().map(PropertyOwner::from),
            created_at: backend.created_at,
            updated_at: backend.updated_at,
        }
    }
}

pub fn adapt_property(backend: &BackendProperty, regions: &RegionCache) -> Property {
    Property::from_backend(backend, regions)
}

/// Listing and favorites payloads come as arrays.
pub fn adapt_properties(backend: &[BackendProperty], regions: &RegionCache) -> Vec<Property> {
    backend
        .iter()
        .map(|p| Property::from_backend(p, regions))
        .collect()
}

/// Embedded relation first, then the cache. Never fails.
fn resolve_region(backend: &BackendProperty, regions: &RegionCache) -> (RegionName, Option<String>) {
    let embedded = backend.region.as_ref();

    let region_id = embedded
        .and_then(|r| r.id.as_deref())
        .filter(|id| !id.is_empty())
        .or(backend.region_id.as_deref())
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    let embedded_name = embedded
        .and_then(|r| r.name.as_deref())
        .filter(|name| !name.trim().is_empty());

    if let Some(raw) = embedded_name {
        let name = RegionName::from_backend(raw);
        if let Some(id) = &region_id {
            regions.register_mapping(id, name);
        }
        return (name, region_id);
    }

    let name = region_id
        .as_deref()
        .map(|id| regions.lookup_name_by_id(id))
        .unwrap_or(RegionName::Other);

    (name, region_id)
}

/// `round(price / area)`, only for a positive area.
fn price_per_meter(price: f64, area: f64) -> Option<i64> {
    if area > 0.0 && price.is_finite() && area.is_finite() {
        Some((price / area).round() as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::{RegionCacheConfig, RegionRecord, RegionSource, RegionSourceError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    struct NoSource;

    #[async_trait]
    impl RegionSource for NoSource {
        async fn list_regions(&self) -> Result<Vec<RegionRecord>, RegionSourceError> {
            Ok(Vec::new())
        }
    }

    fn cache() -> RegionCache {
        RegionCache::new(Arc::new(NoSource), RegionCacheConfig::default())
    }

    fn backend(extra: serde_json::Value) -> BackendProperty {
        let mut base = json!({
            "id": "p1",
            "title": "Three rooms near the park",
            "price": 1000000.0,
            "area": 50.0,
            "status": "ACTIVE",
            "type": "HOUSE",
            "userId": "u1",
            "createdAt": "2024-03-01T10:00:00Z"
        });

        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }

        serde_json::from_value(base).expect("fixture should decode")
    }

    #[test]
    fn maps_enums_and_price_per_meter() {
        let property = adapt_property(&backend(json!({})), &cache());

        assert_eq!(property.property_type, PropertyType::House);
        assert_eq!(property.status, PropertyStatus::Active);
        assert_eq!(property.price_per_meter, Some(20000));
        assert!(property.images.is_empty());
        assert!(property.features.is_empty());
        assert_eq!(property.views, 0);
    }

    #[test]
    fn zero_area_leaves_price_per_meter_absent() {
        let property = adapt_property(&backend(json!({ "area": 0.0 })), &cache());
        assert_eq!(property.price_per_meter, None);

        let out = serde_json::to_value(&property).unwrap();
        assert!(out.get("pricePerMeter").is_none());
    }

    #[test]
    fn price_per_meter_rounds() {
        let property = adapt_property(&backend(json!({ "price": 1000.0, "area": 3.0 })), &cache());
        assert_eq!(property.price_per_meter, Some(333));
    }

    #[test]
    fn unknown_tokens_fall_back() {
        let property = adapt_property(
            &backend(json!({ "type": "CASTLE", "status": "ARCHIVED" })),
            &cache(),
        );
        assert_eq!(property.property_type, PropertyType::Apartment);
        assert_eq!(property.status, PropertyStatus::Inactive);
    }

    #[test]
    fn embedded_region_wins_and_is_registered() {
        let regions = cache();
        regions.register_mapping("r1", RegionName::Chechnya);

        let property = adapt_property(
            &backend(json!({
                "regionId": "r1",
                "region": { "id": "r1", "name": "INGUSHETIA" }
            })),
            &regions,
        );

        assert_eq!(property.region, RegionName::Ingushetia);
        assert_eq!(property.region_id.as_deref(), Some("r1"));
        assert_eq!(regions.lookup_name_by_id("r1"), RegionName::Ingushetia);
    }

    #[test]
    fn embedded_region_without_id_uses_region_id_for_registration() {
        let regions = cache();
        let property = adapt_property(
            &backend(json!({ "regionId": "r7", "region": { "name": "CHECHNYA" } })),
            &regions,
        );

        assert_eq!(property.region, RegionName::Chechnya);
        assert_eq!(regions.lookup_name_by_id("r7"), RegionName::Chechnya);
    }

    #[test]
    fn falls_back_to_cache_then_other() {
        let regions = cache();
        regions.register_mapping("r2", RegionName::Chechnya);

        let known = adapt_property(&backend(json!({ "regionId": "r2" })), &regions);
        assert_eq!(known.region, RegionName::Chechnya);

        let unknown = adapt_property(&backend(json!({ "regionId": "gone" })), &regions);
        assert_eq!(unknown.region, RegionName::Other);

        let blank_name = adapt_property(
            &backend(json!({ "regionId": "r2", "region": { "id": "r2", "name": "  " } })),
            &regions,
        );
        assert_eq!(blank_name.region, RegionName::Chechnya);

        let none = adapt_property(&backend(json!({})), &regions);
        assert_eq!(none.region, RegionName::Other);
        assert_eq!(none.region_id, None);
    }

    #[test]
    fn serializes_frontend_shape() {
        let property = adapt_property(
            &backend(json!({
                "images": ["a.jpg"],
                "user": { "id": "u1", "name": "Aslan", "phone": null }
            })),
            &cache(),
        );
        let out = serde_json::to_value(&property).unwrap();

        assert_eq!(out["type"], "house");
        assert_eq!(out["status"], "active");
        assert_eq!(out["region"], "Other");
        assert_eq!(out["pricePerMeter"], 20000);
        assert_eq!(out["userId"], "u1");
        assert_eq!(out["images"][0], "a.jpg");
        assert_eq!(out["owner"]["name"], "Aslan");
    }

    #[test]
    fn adapts_lists_in_order() {
        let regions = cache();
        let list = vec![
            backend(json!({ "id": "a" })),
            backend(json!({ "id": "b", "type": "LAND" })),
        ];

        let out = adapt_properties(&list, &regions);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].id, "b");
        assert_eq!(out[1].property_type, PropertyType::Land);
    }
}
