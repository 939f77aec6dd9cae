// src/regions/registry.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Region names as shown to users. Closed set; anything the backend sends
/// that we don't recognise collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionName {
    Chechnya,
    Ingushetia,
    Other,
}

/// Canonical region codes used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionBackendCode {
    Chechnya,
    Ingushetia,
    Other,
}

impl RegionName {
    pub const ALL: [RegionName; 3] = [
        RegionName::Chechnya,
        RegionName::Ingushetia,
        RegionName::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RegionName::Chechnya => "Chechnya",
            RegionName::Ingushetia => "Ingushetia",
            RegionName::Other => "Other",
        }
    }

    /// Translate a raw backend code. Never fails: unknown codes are `Other`.
    pub fn from_backend(code: &str) -> RegionName {
        RegionBackendCode::parse(code)
            .map(RegionName::from)
            .unwrap_or(RegionName::Other)
    }

    pub fn backend_code(self) -> RegionBackendCode {
        match self {
            RegionName::Chechnya => RegionBackendCode::Chechnya,
            RegionName::Ingushetia => RegionBackendCode::Ingushetia,
            RegionName::Other => RegionBackendCode::Other,
        }
    }
}

impl RegionBackendCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RegionBackendCode::Chechnya => "CHECHNYA",
            RegionBackendCode::Ingushetia => "INGUSHETIA",
            RegionBackendCode::Other => "OTHER",
        }
    }

    /// Trim + case-insensitive match against the known codes.
    pub fn parse(raw: &str) -> Option<RegionBackendCode> {
        let code = raw.trim().to_uppercase();
        match code.as_str() {
            "CHECHNYA" => Some(RegionBackendCode::Chechnya),
            "INGUSHETIA" => Some(RegionBackendCode::Ingushetia),
            "OTHER" => Some(RegionBackendCode::Other),
            _ => None,
        }
    }
}

impl From<RegionBackendCode> for RegionName {
    fn from(code: RegionBackendCode) -> Self {
        match code {
            RegionBackendCode::Chechnya => RegionName::Chechnya,
            RegionBackendCode::Ingushetia => RegionName::Ingushetia,
            RegionBackendCode::Other => RegionName::Other,
        }
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RegionBackendCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
