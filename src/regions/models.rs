use serde::Deserialize;

// GET /regions
//  └── [ { id, name } ]
//
// `name` stays a raw string here so codes we don't know about still decode;
// the registry maps them to `Other`.

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionRecord {
    pub id: String,
    pub name: String,
}

/// Some deployments wrap list responses as `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RegionListBody {
    Bare(Vec<RegionRecord>),
    Wrapped { data: Vec<RegionRecord> },
}

impl RegionListBody {
    pub(crate) fn into_records(self) -> Vec<RegionRecord> {
        match self {
            RegionListBody::Bare(records) => records,
            RegionListBody::Wrapped { data } => data,
        }
    }
}
