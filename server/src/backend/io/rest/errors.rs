use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::domain::CalendarError;
use crate::backend::storage::DataLoadError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    DataLoad(#[from] DataLoadError),
    #[error("{0}")]
    InvalidCalendar(#[from] CalendarError),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::DataLoad(e) => {
                error!("Failed to load worksheets: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load worksheet data".to_string(),
                )
            }
            ApiError::InvalidCalendar(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
