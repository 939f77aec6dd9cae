use crate::domain::BackendProperty;
use crate::regions::{RegionCache, RegionCacheConfig, RegionRecord, RegionSource, RegionSourceError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// What the next `list_regions` call should do.
pub enum Step {
    Records(Vec<RegionRecord>),
    Fail,
    Panic,
}

/// Region source that plays back a script and counts calls.
/// When gated, every call parks until `release()`.
pub struct ScriptedSource {
    steps: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
    gate: Option<Notify>,
}

impl ScriptedSource {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
            gate: None,
        })
    }

    pub fn gated(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            calls: AtomicUsize::new(0),
            gate: Some(Notify::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Spin (yielding) until the source has been called `n` times.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl RegionSource for ScriptedSource {
    async fn list_regions(&self) -> Result<Vec<RegionRecord>, RegionSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self.steps.lock().pop_front();

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match step {
            Some(Step::Records(records)) => Ok(records),
            Some(Step::Fail) | None => Err(RegionSourceError::Network("connection refused".into())),
            Some(Step::Panic) => panic!("region source blew up"),
        }
    }
}

pub fn record(id: &str, name: &str) -> RegionRecord {
    RegionRecord {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn standard_regions() -> Vec<RegionRecord> {
    vec![
        record("r-che", "CHECHNYA"),
        record("r-ing", "INGUSHETIA"),
        record("r-oth", "OTHER"),
    ]
}

pub fn cache_with(source: Arc<ScriptedSource>) -> RegionCache {
    RegionCache::new(source, RegionCacheConfig::default())
}

/// A minimal valid backend payload; `extra` keys override the defaults.
pub fn backend_property(extra: serde_json::Value) -> BackendProperty {
    let mut base = serde_json::json!({
        "id": "p1",
        "title": "Family house",
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

    serde_json::from_value(base).unwrap_or_else(|e| panic!("bad fixture: {e}"))
}
