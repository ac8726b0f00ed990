//! # REST API Interface Layer
//!
//! HTTP endpoints of the dashboard:
//!
//! - **dashboard_apis**: the HTML page, its fragments, and the 이전달/다음달 form posts
//! - **calendar_apis**: `/api/calendar/*` month grids and the focus-date cursor
//! - **weekly_apis**: `/api/weekly`
//! - **profit_apis**: `/api/profit`
//!
//! Handlers only extract, delegate to the domain services, and serialize.
//! Errors go through [`errors::ApiError`]: invalid calendar input is 400 and a
//! worksheet load failure is 500.

pub mod calendar_apis;
pub mod dashboard_apis;
pub mod errors;
pub mod profit_apis;
pub mod weekly_apis;

pub use errors::{ApiError, ApiResult};
