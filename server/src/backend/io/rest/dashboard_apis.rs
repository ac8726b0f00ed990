//! The HTML page, its fragments, and the form-post navigation used by the page.

use axum::{
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use log::info;

use super::errors::ApiResult;
use crate::backend::domain::CalendarCursor;
use crate::backend::io::html;
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_dashboard_page))
        .route("/calendar/previous", post(previous_month_redirect))
        .route("/calendar/next", post(next_month_redirect))
        .route("/fragments/weekly", get(get_weekly_fragment))
        .route("/fragments/header", get(get_header_fragment))
        .route("/fragments/calendar", get(get_calendar_fragment))
        .route("/fragments/profit", get(get_profit_fragment))
}

/// Full dashboard page
async fn get_dashboard_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    info!("GET /");

    let data = state.snapshot().await?;
    let view = state
        .dashboard_service
        .build_view(&data, state.calendar_cursor());
    Ok(Html(html::render_page(&view)))
}

async fn previous_month_redirect(State(state): State<AppState>) -> Redirect {
    let cursor = state.update_calendar_cursor(CalendarCursor::previous_month);
    info!("POST /calendar/previous - now {}-{:02}", cursor.year(), cursor.month());
    Redirect::to("/")
}

async fn next_month_redirect(State(state): State<AppState>) -> Redirect {
    let cursor = state.update_calendar_cursor(CalendarCursor::next_month);
    info!("POST /calendar/next - now {}-{:02}", cursor.year(), cursor.month());
    Redirect::to("/")
}

async fn get_weekly_fragment(State(state): State<AppState>) -> ApiResult<Html<String>> {
    info!("GET /fragments/weekly");

    let data = state.snapshot().await?;
    Ok(Html(html::render_weekly(&state.dashboard_service.weekly(&data))))
}

async fn get_header_fragment(State(state): State<AppState>) -> Html<String> {
    info!("GET /fragments/header");

    Html(html::render_calendar_header(state.calendar_cursor().into()))
}

async fn get_calendar_fragment(State(state): State<AppState>) -> ApiResult<Html<String>> {
    info!("GET /fragments/calendar");

    let data = state.snapshot().await?;
    let grid = state
        .dashboard_service
        .calendar(&data, state.calendar_cursor());
    Ok(Html(html::render_calendar(&grid)))
}

async fn get_profit_fragment(State(state): State<AppState>) -> ApiResult<Html<String>> {
    info!("GET /fragments/profit");

    let data = state.snapshot().await?;
    Ok(Html(html::render_profit(&state.dashboard_service.profit(&data))))
}
