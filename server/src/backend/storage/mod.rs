//! # Storage Module
//!
//! Loads the dashboard's two worksheets.
//!
//! The spreadsheet is exported as one CSV file per worksheet into a data
//! directory. [`csv::CsvDataSource`] reads those files and coerces each cell,
//! and [`cache::CachedDataSource`] keeps the last snapshot around for the
//! configured refresh interval so every page view doesn't hit the disk.

pub mod cache;
pub mod csv;
pub mod traits;

pub use cache::{CachedDataSource, DashboardData};
pub use self::csv::{CsvConnection, CsvDataSource};
pub use traits::{DashboardDataSource, DataLoadError};
