//! Time-based snapshot cache in front of a [`DashboardDataSource`].
//!
//! Both worksheets are reloaded together once the snapshot is older than the
//! refresh interval. A failed reload is returned to the caller; the stale
//! snapshot is not served in its place.

use log::{debug, info};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::backend::domain::models::{ScheduleEntry, TradeEntry};
use crate::backend::storage::traits::{DashboardDataSource, DataLoadError};

/// Default refresh interval of the worksheet cache
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// One consistent read of both worksheets
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardData {
    pub schedule: Vec<ScheduleEntry>,
    pub trades: Vec<TradeEntry>,
}

struct CachedSnapshot {
    loaded_at: Instant,
    data: Arc<DashboardData>,
}

pub struct CachedDataSource<S> {
    source: S,
    refresh_interval: Duration,
    snapshot: Mutex<Option<CachedSnapshot>>,
}

impl<S: DashboardDataSource> CachedDataSource<S> {
    pub fn new(source: S, refresh_interval: Duration) -> Self {
        Self {
            source,
            refresh_interval,
            snapshot: Mutex::new(None),
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Current snapshot, reloading from the source when it has gone stale
    pub async fn snapshot(&self) -> Result<Arc<DashboardData>, DataLoadError> {
        let mut guard = self.snapshot.lock().await;

        if let Some(cached) = guard.as_ref() {
            if cached.loaded_at.elapsed() < self.refresh_interval {
                debug!("Serving cached worksheets ({:?} old)", cached.loaded_at.elapsed());
                return Ok(Arc::clone(&cached.data));
            }
        }

        let schedule = self.source.load_schedule().await?;
        let trades = self.source.load_trades().await?;
        info!(
            "Reloaded worksheets: {} schedule rows, {} trades",
            schedule.len(),
            trades.len()
        );

        let data = Arc::new(DashboardData { schedule, trades });
        *guard = Some(CachedSnapshot {
            loaded_at: Instant::now(),
            data: Arc::clone(&data),
        });
        Ok(data)
    }
}
