// src/regions/source.rs
use crate::regions::models::{RegionListBody, RegionRecord};
use crate::regions::RegionSourceError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Where the cache gets the authoritative region list from.
#[async_trait]
pub trait RegionSource: Send + Sync {
    async fn list_regions(&self) -> Result<Vec<RegionRecord>, RegionSourceError>;
}

/// `GET {base}/regions` against the marketplace backend.
pub struct HttpRegionSource {
    client: Client,
    regions_url: Url,
    token: Option<String>,
}

impl HttpRegionSource {
    pub fn new(
        base_url: &Url,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RegionSourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RegionSourceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            regions_url: regions_url(base_url)?,
            token,
        })
    }

    pub fn regions_url(&self) -> &Url {
        &self.regions_url
    }

    fn headers(&self) -> Result<HeaderMap, RegionSourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                RegionSourceError::UnexpectedShape(format!("invalid API token: {e}"))
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

#[async_trait]
impl RegionSource for HttpRegionSource {
    async fn list_regions(&self) -> Result<Vec<RegionRecord>, RegionSourceError> {
        let resp = self
            .client
            .get(self.regions_url.clone())
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| RegionSourceError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| RegionSourceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(RegionSourceError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_region_list(&text)
    }
}

/// Join `regions` onto the API base, keeping any path prefix like `/api/v1`.
pub fn regions_url(base: &Url) -> Result<Url, RegionSourceError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join("regions")
        .map_err(|e| RegionSourceError::UnexpectedShape(format!("bad base URL: {e}")))
}

pub fn parse_region_list(text: &str) -> Result<Vec<RegionRecord>, RegionSourceError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| RegionSourceError::JsonParse(e.to_string()))?;

    let body: RegionListBody = serde_json::from_value(value).map_err(|e| {
        RegionSourceError::UnexpectedShape(format!("region list missing: {e}"))
    })?;

    Ok(body.into_records())
}
