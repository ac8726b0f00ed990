//! # CSV Storage
//!
//! File-based worksheet storage. Each worksheet is one CSV export with the
//! sheet's Korean header row.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── 일정.csv    ← schedule: 종목명, 증권사, 테마, 청약일, 상장일, 공모가, 최소증거금, 균등, 비례, 예측
//! └── 매매.csv    ← trades:   매도일, 실제이익
//! ```

pub mod connection;
pub mod data_source;
pub mod schedule_repository;
pub mod trade_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use data_source::CsvDataSource;
pub use schedule_repository::ScheduleRepository;
pub use trade_repository::TradeRepository;
