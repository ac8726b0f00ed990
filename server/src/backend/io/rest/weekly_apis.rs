use axum::{extract::State, response::Json, routing::get, Router};
use log::info;
use shared::WeeklySchedule;

use super::errors::ApiResult;
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/weekly", get(get_weekly_schedule))
}

/// This week's cards
async fn get_weekly_schedule(State(state): State<AppState>) -> ApiResult<Json<WeeklySchedule>> {
    info!("GET /api/weekly");

    let data = state.snapshot().await?;
    Ok(Json(state.dashboard_service.weekly(&data)))
}

#[cfg(test)]
mod tests {
    use crate::backend::domain::models::schedule::test_support::{date, entry};
    use crate::backend::storage::DashboardData;
    use crate::backend::test_support::{app_state, router};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use shared::WeeklySchedule;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_get_weekly_schedule() -> Result<(), Box<dyn std::error::Error>> {
        let data = DashboardData {
            schedule: vec![
                entry("지난주", Some(date(2025, 6, 5)), None),
                entry("금요일상장", Some(date(2025, 5, 29)), Some(date(2025, 6, 13))),
                entry("월요일청약", Some(date(2025, 6, 9)), None),
            ],
            trades: Vec::new(),
        };
        let (state, _) = app_state(data);
        let app = router(state);

        let response = app
            .oneshot(Request::builder().uri("/api/weekly").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let weekly: WeeklySchedule = serde_json::from_slice(&body)?;
        let names: Vec<&str> = weekly.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["월요일청약", "금요일상장"]);
        assert_eq!(weekly.window_start, date(2025, 6, 9));
        assert_eq!(weekly.window_end, date(2025, 6, 13));
        Ok(())
    }
}
