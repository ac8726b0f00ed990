//! # Storage Traits
//!
//! Abstraction over where the two worksheets come from, so the domain layer
//! works the same against CSV exports, an in-memory fake, or any other
//! sheet backend.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use crate::backend::domain::models::{ScheduleEntry, TradeEntry};

/// Failure to read one of the worksheets. Cell-level problems never end up
/// here; those are coerced to missing values.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("worksheet file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("worksheet load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Source of the schedule (`일정`) and trade (`매매`) worksheets
#[async_trait]
pub trait DashboardDataSource: Send + Sync {
    /// Load every schedule row, in sheet order
    async fn load_schedule(&self) -> Result<Vec<ScheduleEntry>, DataLoadError>;

    /// Load every trade row, in sheet order
    async fn load_trades(&self) -> Result<Vec<TradeEntry>, DataLoadError>;
}

#[async_trait]
impl<T: DashboardDataSource + ?Sized> DashboardDataSource for Arc<T> {
    async fn load_schedule(&self) -> Result<Vec<ScheduleEntry>, DataLoadError> {
        (**self).load_schedule().await
    }

    async fn load_trades(&self) -> Result<Vec<TradeEntry>, DataLoadError> {
        (**self).load_trades().await
    }
}
