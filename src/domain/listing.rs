// src/domain/listing.rs
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Land,
    Commercial,
}

/// Listing lifecycle as the marketplace shows it. `Pending` and `Rejected`
/// come from admin moderation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Active,
    Inactive,
    Sold,
    Pending,
    Rejected,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Land => "land",
            PropertyType::Commercial => "commercial",
        }
    }

    pub fn backend_code(self) -> &'static str {
        match self {
            PropertyType::Apartment => "APARTMENT",
            PropertyType::House => "HOUSE",
            PropertyType::Land => "LAND",
            PropertyType::Commercial => "COMMERCIAL",
        }
    }

    pub fn parse(raw: &str) -> Option<PropertyType> {
        match raw.trim().to_uppercase().as_str() {
            "APARTMENT" => Some(PropertyType::Apartment),
            "HOUSE" => Some(PropertyType::House),
            "LAND" => Some(PropertyType::Land),
            "COMMERCIAL" => Some(PropertyType::Commercial),
            _ => None,
        }
    }

    /// Unrecognised tokens are shown as apartments.
    pub fn from_backend(raw: &str) -> PropertyType {
        Self::parse(raw).unwrap_or(PropertyType::Apartment)
    }
}

impl PropertyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyStatus::Active => "active",
            PropertyStatus::Inactive => "inactive",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Pending => "pending",
            PropertyStatus::Rejected => "rejected",
        }
    }

    pub fn backend_code(self) -> &'static str {
        match self {
            PropertyStatus::Active => "ACTIVE",
            PropertyStatus::Inactive => "INACTIVE",
            PropertyStatus::Sold => "SOLD",
            PropertyStatus::Pending => "PENDING",
            PropertyStatus::Rejected => "REJECTED",
        }
    }

    pub fn parse(raw: &str) -> Option<PropertyStatus> {
        match raw.trim().to_uppercase().as_str() {
            "ACTIVE" => Some(PropertyStatus::Active),
            "INACTIVE" => Some(PropertyStatus::Inactive),
            "SOLD" => Some(PropertyStatus::Sold),
            "PENDING" => Some(PropertyStatus::Pending),
            "REJECTED" => Some(PropertyStatus::Rejected),
            _ => None,
        }
    }

    /// Unrecognised tokens are treated as not publicly available.
    pub fn from_backend(raw: &str) -> PropertyStatus {
        Self::parse(raw).unwrap_or_else(|| {
            debug!(status = %raw, "unknown property status; showing as inactive");
            PropertyStatus::Inactive
        })
    }
}
