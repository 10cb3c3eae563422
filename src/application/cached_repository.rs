// TTL cache over a flux repository
use crate::application::flux_repository::FluxRepository;
use crate::domain::reading::FluxSeries;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Injectable time source so the TTL logic is testable with a fake clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Memoizes the last successful fetch for a fixed TTL. The cache is keyed by
/// nothing but time-since-last-fetch, so control changes (lookback slider,
/// log toggle) re-window cached data without touching the upstream. Errors
/// propagate uncached.
pub struct CachedFluxRepository {
    inner: Arc<dyn FluxRepository>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    cached: Mutex<Option<CacheEntry>>,
}

struct CacheEntry {
    fetched_at: Instant,
    series: FluxSeries,
}

impl CachedFluxRepository {
    pub fn new(inner: Arc<dyn FluxRepository>, ttl: Duration) -> Self {
        Self::with_clock(inner, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(
        inner: Arc<dyn FluxRepository>,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner,
            ttl,
            clock,
            cached: Mutex::new(None),
        }
    }
}

#[async_trait]
impl FluxRepository for CachedFluxRepository {
    async fn fetch_series(&self) -> anyhow::Result<FluxSeries> {
        let mut slot = self.cached.lock().await;

        if let Some(entry) = slot.as_ref() {
            let age = self.clock.now().duration_since(entry.fetched_at);
            if age < self.ttl {
                tracing::debug!("serving flux series from cache (age {:?})", age);
                return Ok(entry.series.clone());
            }
        }

        let series = self.inner.fetch_series().await?;
        *slot = Some(CacheEntry {
            fetched_at: self.clock.now(),
            series: series.clone(),
        });

        Ok(series)
    }
}
