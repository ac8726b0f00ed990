use async_trait::async_trait;

use super::connection::CsvConnection;
use super::schedule_repository::ScheduleRepository;
use super::trade_repository::TradeRepository;
use crate::backend::domain::models::{ScheduleEntry, TradeEntry};
use crate::backend::storage::traits::{DashboardDataSource, DataLoadError};

/// Worksheet source backed by CSV exports in one data directory
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    schedule_repository: ScheduleRepository,
    trade_repository: TradeRepository,
}

impl CsvDataSource {
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            schedule_repository: ScheduleRepository::new(connection.clone()),
            trade_repository: TradeRepository::new(connection),
        }
    }
}

#[async_trait]
impl DashboardDataSource for CsvDataSource {
    async fn load_schedule(&self) -> Result<Vec<ScheduleEntry>, DataLoadError> {
        let repository = self.schedule_repository.clone();
        tokio::task::spawn_blocking(move || repository.read_schedule())
            .await?
    }

    async fn load_trades(&self) -> Result<Vec<TradeEntry>, DataLoadError> {
        let repository = self.trade_repository.clone();
        tokio::task::spawn_blocking(move || repository.read_trades())
            .await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::csv::test_utils::TestEnvironment;
    use crate::backend::storage::CachedDataSource;
    use chrono::NaiveDate;
    use std::fs;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_loads_worksheets_through_cache() {
        let env = TestEnvironment::new().unwrap();
        env.write_schedule("종목명,증권사,청약일,상장일\n에이피알,KB증권,2025-06-11,2025-06-20\n")
            .unwrap();
        env.write_trades("매도일,실제이익\n2025-06-20,\"152,000\"\n2024-11-05,-12000\n")
            .unwrap();

        let cache = CachedDataSource::new(
            CsvDataSource::new(env.connection.clone()),
            Duration::from_secs(3600),
        );
        let data = cache.snapshot().await.unwrap();

        assert_eq!(data.schedule.len(), 1);
        assert_eq!(data.schedule[0].name, "에이피알");
        assert_eq!(data.schedule[0].subscription_date, NaiveDate::from_ymd_opt(2025, 6, 11));
        assert_eq!(data.trades.len(), 2);
        assert_eq!(data.trades[0].realized_profit, Some(152_000.0));
        assert_eq!(data.trades[1].realized_profit, Some(-12_000.0));

        // Edits inside the refresh interval are not picked up
        env.write_schedule("종목명\nA\nB\n").unwrap();
        let again = cache.snapshot().await.unwrap();
        assert!(Arc::ptr_eq(&data, &again));
    }

    #[tokio::test]
    async fn test_invalid_utf8_cell_is_a_csv_error() {
        let env = TestEnvironment::new().unwrap();
        let mut contents = "종목명,증권사\n".as_bytes().to_vec();
        contents.extend_from_slice(b"\xff\xfe,KB\n");
        fs::write(env.connection.schedule_file_path(), contents).unwrap();
        env.write_trades("매도일,실제이익\n").unwrap();

        let source = CsvDataSource::new(env.connection.clone());
        let result = source.load_schedule().await;
        assert!(matches!(result, Err(DataLoadError::Csv { .. })), "{:?}", result);

        let cache = CachedDataSource::new(source, Duration::ZERO);
        assert!(matches!(cache.snapshot().await, Err(DataLoadError::Csv { .. })));
    }

    #[tokio::test]
    async fn test_invalid_utf8_trade_is_a_csv_error() {
        let env = TestEnvironment::new().unwrap();
        let mut contents = "매도일,실제이익\n".as_bytes().to_vec();
        contents.extend_from_slice(b"2025-01-02,\xff\n");
        fs::write(env.connection.trades_file_path(), contents).unwrap();

        let result = CsvDataSource::new(env.connection.clone()).load_trades().await;
        assert!(matches!(result, Err(DataLoadError::Csv { .. })), "{:?}", result);
    }

    #[tokio::test]
    async fn test_missing_trades_file() {
        let env = TestEnvironment::new().unwrap();
        env.write_schedule("종목명\nA\n").unwrap();

        let cache = CachedDataSource::new(
            CsvDataSource::new(env.connection.clone()),
            Duration::from_secs(3600),
        );
        assert!(matches!(cache.snapshot().await, Err(DataLoadError::NotFound(_))));
    }
}
