// src/regions/cache.rs
use crate::regions::{RegionName, RegionRecord, RegionSource};
use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct RegionCacheConfig {
    /// How long a successful refresh is trusted before the next
    /// `ensure_fresh` goes back to the source.
    pub ttl: Duration,
}

impl Default for RegionCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

#[derive(Default)]
struct RegionTable {
    by_id: HashMap<String, RegionName>,
    /// Most recently registered id for each name.
    by_name: HashMap<RegionName, String>,
    refreshed_at: Option<Instant>,
}

impl RegionTable {
    fn upsert(&mut self, id: &str, name: RegionName) {
        let previous = self.by_id.insert(id.to_string(), name);

        if let Some(prev) = previous.filter(|prev| *prev != name) {
            if self.by_name.get(&prev).map(String::as_str) == Some(id) {
                // Point the old name at another id that still carries it, if any.
                let replacement = self
                    .by_id
                    .iter()
                    .filter(|(_, n)| **n == prev)
                    .map(|(other, _)| other)
                    .min()
                    .cloned();

                match replacement {
                    Some(other) => self.by_name.insert(prev, other),
                    None => self.by_name.remove(&prev),
                };
            }
        }

        self.by_name.insert(name, id.to_string());
    }

    fn is_fresh(&self, ttl: Duration, now: Instant) -> bool {
        !self.by_id.is_empty()
            && self
                .refreshed_at
                .is_some_and(|at| now.saturating_duration_since(at) < ttl)
    }
}

type Flight = Shared<BoxFuture<'static, ()>>;

struct Inner {
    source: Arc<dyn RegionSource>,
    config: RegionCacheConfig,
    table: RwLock<RegionTable>,
    in_flight: Mutex<Option<Flight>>,
}

/// Clears the in-flight slot if the refresh future unwinds before it
/// publishes its outcome.
struct FlightGuard<'a> {
    slot: &'a Mutex<Option<Flight>>,
    armed: bool,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.slot.lock().take();
        }
    }
}

/// Region id -> name table backed by a remote region list.
///
/// Lookups are synchronous and never wait on the network. `ensure_fresh`
/// hydrates the table at most once per TTL window, and concurrent callers
/// share a single in-flight fetch. Clones share the same table.
#[derive(Clone)]
pub struct RegionCache {
    inner: Arc<Inner>,
}

impl RegionCache {
    pub fn new(source: Arc<dyn RegionSource>, config: RegionCacheConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                config,
                table: RwLock::new(RegionTable::default()),
                in_flight: Mutex::new(None),
            }),
        }
    }

    pub fn config(&self) -> &RegionCacheConfig {
        &self.inner.config
    }

    pub fn register_mapping(&self, id: &str, name: RegionName) {
        self.inner.table.write().upsert(id, name);
    }

    pub fn lookup_by_name(&self, name: RegionName) -> Option<String> {
        self.inner.table.read().by_name.get(&name).cloned()
    }

    pub fn lookup_name_by_id(&self, id: &str) -> RegionName {
        self.inner
            .table
            .read()
            .by_id
            .get(id)
            .copied()
            .unwrap_or(RegionName::Other)
    }

    pub fn is_initialized(&self) -> bool {
        !self.inner.table.read().by_id.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.table.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_initialized()
    }

    /// Snapshot of every known mapping, sorted by id.
    pub fn entries(&self) -> Vec<(String, RegionName)> {
        let mut entries: Vec<_> = self
            .inner
            .table
            .read()
            .by_id
            .iter()
            .map(|(id, name)| (id.clone(), *name))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    pub fn last_refreshed(&self) -> Option<Instant> {
        self.inner.table.read().refreshed_at
    }

    /// Drop every entry and forget the last refresh.
    pub fn clear(&self) {
        let mut table = self.inner.table.write();
        table.by_id.clear();
        table.by_name.clear();
        table.refreshed_at = None;
    }

    /// Make sure the table has been hydrated within the TTL window.
    ///
    /// Never fails. If the source errors or returns nothing, the current
    /// entries are left exactly as they were and the next call retries.
    pub async fn ensure_fresh(&self) {
        let flight = {
            let mut slot = self.inner.in_flight.lock();

            if self.inner.is_fresh() {
                return;
            }

            match slot.as_ref() {
                Some(flight) => {
                    debug!("joining in-flight region refresh");
                    flight.clone()
                }
                None => {
                    let flight = Inner::start_refresh(Arc::clone(&self.inner));
                    *slot = Some(flight.clone());
                    flight
                }
            }
        };

        flight.await;
    }
}

impl Inner {
    fn is_fresh(&self) -> bool {
        self.table.read().is_fresh(self.config.ttl, Instant::now())
    }

    fn start_refresh(inner: Arc<Inner>) -> Flight {
        async move {
            let mut guard = FlightGuard {
                slot: &inner.in_flight,
                armed: true,
            };

            let fetched = AssertUnwindSafe(inner.source.list_regions())
                .catch_unwind()
                .await;

            // Publish and release under the slot lock: a caller sees either
            // this flight still running or its outcome, never a finished
            // flight it could join instead of retrying.
            let mut slot = inner.in_flight.lock();
            match fetched {
                Ok(Ok(records)) => inner.publish(&records),
                Ok(Err(e)) => warn!(error = %e, "region refresh failed; keeping cached entries"),
                Err(_) => warn!("region refresh panicked; keeping cached entries"),
            }
            slot.take();
            guard.armed = false;
        }
        .boxed()
        .shared()
    }

    fn publish(&self, records: &[RegionRecord]) {
        if records.is_empty() {
            warn!("region refresh returned no regions; keeping cached entries");
            return;
        }

        let mut table = self.table.write();
        for record in records {
            table.upsert(&record.id, RegionName::from_backend(&record.name));
        }
        table.refreshed_at = Some(Instant::now());

        info!(
            fetched = records.len(),
            cached = table.by_id.len(),
            "region cache refreshed"
        );
    }
}
