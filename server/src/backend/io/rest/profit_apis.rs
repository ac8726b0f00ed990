use axum::{extract::State, response::Json, routing::get, Router};
use log::info;
use shared::ProfitSummary;

use super::errors::ApiResult;
use crate::backend::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/profit", get(get_profit_summary))
}

/// Total and current-year realized profit
async fn get_profit_summary(State(state): State<AppState>) -> ApiResult<Json<ProfitSummary>> {
    info!("GET /api/profit");

    let data = state.snapshot().await?;
    Ok(Json(state.dashboard_service.profit(&data)))
}

#[cfg(test)]
mod tests {
    use crate::backend::domain::models::schedule::test_support::date;
    use crate::backend::domain::models::TradeEntry;
    use crate::backend::io::rest::errors::ErrorBody;
    use crate::backend::storage::DashboardData;
    use crate::backend::test_support::{app_state, router};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use shared::ProfitSummary;
    use std::sync::atomic::Ordering;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_get_profit_summary() -> Result<(), Box<dyn std::error::Error>> {
        let data = DashboardData {
            schedule: Vec::new(),
            trades: vec![
                TradeEntry {
                    sale_date: Some(date(2025, 2, 3)),
                    realized_profit: Some(150_000.0),
                },
                TradeEntry {
                    sale_date: Some(date(2024, 12, 30)),
                    realized_profit: Some(80_000.0),
                },
            ],
        };
        let (state, _) = app_state(data);

        let response = router(state)
            .oneshot(Request::builder().uri("/api/profit").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let summary: ProfitSummary = serde_json::from_slice(&body)?;
        assert_eq!(summary.current_year, 2025);
        assert_eq!(summary.year_profit, 150_000.0);
        assert_eq!(summary.total_profit, 230_000.0);
        assert_eq!(summary.formatted_year_profit, "150,000");
        Ok(())
    }

    #[tokio::test]
    async fn test_load_failure_returns_500() -> Result<(), Box<dyn std::error::Error>> {
        let (state, source) = app_state(DashboardData::default());
        source.failing.store(true, Ordering::SeqCst);

        let response = router(state)
            .oneshot(Request::builder().uri("/api/profit").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let error: ErrorBody = serde_json::from_slice(&body)?;
        assert_eq!(error.code, 500);
        assert_eq!(error.message, "Failed to load worksheet data");
        Ok(())
    }
}
