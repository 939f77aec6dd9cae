use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

// property
//  ├── id, title, description
//  ├── price, area, rooms, floor, totalFloors, address
//  ├── type            APARTMENT | HOUSE | LAND | COMMERCIAL
//  ├── status          ACTIVE | INACTIVE | SOLD | PENDING | REJECTED
//  ├── regionId
//  ├── region          (optional embedded relation)
//  │    ├── id
//  │    └── name       CHECHNYA | INGUSHETIA | OTHER
//  ├── images[], features[], views
//  ├── userId
//  ├── user            (optional embedded relation)
//  │    ├── id
//  │    ├── name
//  │    └── phone
//  └── createdAt, updatedAt

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendProperty {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,

    pub price: f64,
    pub area: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub rooms: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub floor: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_floors: Option<i32>,
    #[serde(default, deserialize_with = "lenient")]
    pub address: Option<String>,

    #[serde(rename = "type")]
    pub property_type: String,
    pub status: String,

    #[serde(default, deserialize_with = "lenient")]
    pub region_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<BackendRegion>,

    #[serde(default, deserialize_with = "lenient")]
    pub images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub features: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub views: Option<u64>,

    pub user_id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<BackendUser>,

    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendRegion {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendUser {
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub phone: Option<String>,
}

/// Optional fields degrade to their default when the backend sends a value of
/// the wrong shape, so one bad field doesn't sink the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
