//! # Backend Module
//!
//! Contains all non-UI logic for the IPO dashboard.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: Weekly window selection, calendar grid, holidays, profit totals
//! - **Storage**: Worksheet CSV loading behind a refresh-interval cache
//! - **IO**: HTML pages/fragments and the JSON REST API
//!
//! ## Architecture
//!
//! ```text
//! Browser (HTML page, fragments) / JSON clients
//!     ↓
//! IO Layer (axum handlers, HTML rendering)
//!     ↓
//! Domain Layer (services producing shared view structs)
//!     ↓
//! Storage Layer (CSV worksheets, snapshot cache)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::{info, warn};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::config::DashboardConfig;
use crate::backend::domain::{
    CalendarCursor, Clock, DashboardService, HolidayCalendar, KoreanHolidays, SystemClock,
};
use crate::backend::storage::{
    CachedDataSource, CsvDataSource, DashboardData, DashboardDataSource, DataLoadError,
};

/// Main application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub data_source: Arc<CachedDataSource<Arc<dyn DashboardDataSource>>>,
    pub dashboard_service: DashboardService,
    calendar_cursor: Arc<Mutex<CalendarCursor>>,
}

impl AppState {
    /// The cursor starts on the month containing today
    pub fn new(
        source: Arc<dyn DashboardDataSource>,
        refresh_interval: Duration,
        holidays: Arc<dyn HolidayCalendar>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let cursor = CalendarCursor::for_date(clock.today());
        Self {
            data_source: Arc::new(CachedDataSource::new(source, refresh_interval)),
            dashboard_service: DashboardService::new(holidays, clock),
            calendar_cursor: Arc::new(Mutex::new(cursor)),
        }
    }

    pub async fn snapshot(&self) -> Result<Arc<DashboardData>, DataLoadError> {
        self.data_source.snapshot().await
    }

    pub fn calendar_cursor(&self) -> CalendarCursor {
        *self
            .calendar_cursor
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Apply `update` to the cursor under the lock and return the new value
    pub fn update_calendar_cursor<F>(&self, update: F) -> CalendarCursor
    where
        F: FnOnce(&mut CalendarCursor),
    {
        let mut cursor = self
            .calendar_cursor
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        update(&mut cursor);
        *cursor
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &DashboardConfig) -> Result<AppState> {
    let timezone = config.timezone()?;
    info!("Using timezone {}", timezone);
    let clock = Arc::new(SystemClock::new(timezone));

    if !config.extra_holidays.is_empty() {
        info!("Adding {} configured holidays", config.extra_holidays.len());
    }
    let holidays = Arc::new(KoreanHolidays::with_extra_holidays(
        config.extra_holidays.iter().copied(),
    ));

    let connection = config.csv_connection();
    info!(
        "Reading worksheets from {} (refresh every {}s)",
        connection.base_directory().display(),
        config.refresh_interval_secs
    );
    if !connection.base_directory().is_dir() {
        warn!(
            "Data directory {} does not exist yet; requests will fail until it does",
            connection.base_directory().display()
        );
    }
    let source: Arc<dyn DashboardDataSource> = Arc::new(CsvDataSource::new(connection));

    Ok(AppState::new(source, config.refresh_interval(), holidays, clock))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: Option<&str>) -> Result<Router> {
    let api_routes = Router::new()
        .nest("/calendar", io::rest::calendar_apis::router())
        .merge(io::rest::weekly_apis::router())
        .merge(io::rest::profit_apis::router());

    let router = Router::new()
        .merge(io::rest::dashboard_apis::router())
        .nest("/api", api_routes)
        .with_state(app_state);

    let router = match allowed_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid allowed origin: {}", origin))?;
            info!("Allowing cross-origin requests from {:?}", origin);
            router.layer(
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers(Any),
            )
        }
        None => router,
    };

    Ok(router.layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::backend::domain::FixedClock;
    use crate::backend::storage::cache::test_support::FakeDataSource;
    use chrono::NaiveDate;

    /// 2025-06-11, a Wednesday
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 11).unwrap()
    }

    pub fn app_state(data: DashboardData) -> (AppState, Arc<FakeDataSource>) {
        let source = Arc::new(FakeDataSource::new(data));
        let state = AppState::new(
            source.clone(),
            Duration::from_secs(3600),
            Arc::new(KoreanHolidays::new()),
            Arc::new(FixedClock(today())),
        );
        (state, source)
    }

    pub fn router(state: AppState) -> Router {
        create_router(state, None).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[test]
    fn test_cursor_starts_on_todays_month() {
        let (state, _) = app_state(DashboardData::default());
        let cursor = state.calendar_cursor();
        assert_eq!((cursor.year(), cursor.month()), (2025, 6));
    }

    #[test]
    fn test_cursor_survives_poisoned_lock() {
        let (state, _) = app_state(DashboardData::default());
        let poisoned = state.clone();
        let _ = std::thread::spawn(move || {
            poisoned.update_calendar_cursor(|_| panic!("poison the cursor lock"));
        })
        .join();

        let cursor = state.update_calendar_cursor(CalendarCursor::next_month);
        assert_eq!((cursor.year(), cursor.month()), (2025, 7));
    }

    #[test]
    fn test_invalid_allowed_origin_is_rejected() {
        let (state, _) = app_state(DashboardData::default());
        assert!(create_router(state, Some("bad\norigin")).is_err());
    }

    #[tokio::test]
    async fn test_cors_header_for_allowed_origin() -> Result<(), Box<dyn std::error::Error>> {
        let (state, _) = app_state(DashboardData::default());
        let app = create_router(state, Some("http://localhost:8080"))?;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/profit")
                    .header(header::ORIGIN, "http://localhost:8080")
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:8080"))
        );
        Ok(())
    }

    #[test]
    fn test_initialize_backend_with_defaults() {
        let state = initialize_backend(&DashboardConfig::default()).unwrap();
        assert_eq!(state.data_source.refresh_interval(), Duration::from_secs(300));
    }
}
