use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use log::info;
use serde::Deserialize;
use shared::{CalendarFocusDate, CalendarGrid, UpdateCalendarFocusRequest, UpdateCalendarFocusResponse};

use super::errors::ApiResult;
use crate::backend::domain::CalendarCursor;
use crate::backend::AppState;

// Query parameters for calendar month API
#[derive(Debug, Deserialize)]
pub struct CalendarMonthQuery {
    pub year: i32,
    pub month: u32,
}

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/month", get(get_calendar_month))
        .route("/focus-date", get(get_focus_date).post(set_focus_date))
        .route("/focus-date/previous", post(navigate_previous_month))
        .route("/focus-date/next", post(navigate_next_month))
}

fn focus_response(state: &AppState, cursor: CalendarCursor, verb: &str) -> UpdateCalendarFocusResponse {
    UpdateCalendarFocusResponse {
        focus_date: cursor.into(),
        success_message: format!(
            "{} {}",
            verb,
            state.dashboard_service.calendar_service().month_title(cursor)
        ),
    }
}

/// Calendar grid for any month, independent of the session cursor
async fn get_calendar_month(
    State(state): State<AppState>,
    Query(query): Query<CalendarMonthQuery>,
) -> ApiResult<Json<CalendarGrid>> {
    info!("GET /api/calendar/month - query: {:?}", query);

    let cursor = CalendarCursor::new(query.year, query.month)?;
    let data = state.snapshot().await?;
    Ok(Json(state.dashboard_service.calendar(&data, cursor)))
}

/// Get the current focus date for calendar navigation
async fn get_focus_date(State(state): State<AppState>) -> Json<CalendarFocusDate> {
    info!("GET /api/calendar/focus-date");

    Json(state.calendar_cursor().into())
}

/// Set the focus date for calendar navigation
async fn set_focus_date(
    State(state): State<AppState>,
    Json(request): Json<UpdateCalendarFocusRequest>,
) -> ApiResult<Json<UpdateCalendarFocusResponse>> {
    info!("POST /api/calendar/focus-date - request: {:?}", request);

    let requested = CalendarCursor::new(request.year, request.month)?;
    let cursor = state.update_calendar_cursor(|cursor| *cursor = requested);
    Ok(Json(focus_response(&state, cursor, "Calendar focus set to")))
}

/// Navigate to the previous month
async fn navigate_previous_month(State(state): State<AppState>) -> Json<UpdateCalendarFocusResponse> {
    info!("POST /api/calendar/focus-date/previous");

    let cursor = state.update_calendar_cursor(CalendarCursor::previous_month);
    Json(focus_response(&state, cursor, "Navigated to"))
}

/// Navigate to the next month
async fn navigate_next_month(State(state): State<AppState>) -> Json<UpdateCalendarFocusResponse> {
    info!("POST /api/calendar/focus-date/next");

    let cursor = state.update_calendar_cursor(CalendarCursor::next_month);
    Json(focus_response(&state, cursor, "Navigated to"))
}
