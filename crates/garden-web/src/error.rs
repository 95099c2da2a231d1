//! API error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use garden_core::error::GardenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Garden(#[from] GardenError),

    #[error("No cell at ({row}, {col})")]
    NoSuchCell { row: usize, col: usize },

    #[error("Session worker is not running")]
    WorkerGone,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Garden(e) => match e {
                GardenError::UnknownPlant(_) | GardenError::UnknownTag(_) => {
                    StatusCode::NOT_FOUND
                }
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::NoSuchCell { .. } => StatusCode::NOT_FOUND,
            ApiError::WorkerGone => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let invalid = ApiError::from(GardenError::InvalidPosition {
            row: 9,
            col: 0,
            rows: 6,
            cols: 6,
        });
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(GardenError::UnknownPlant("basil".into())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::NoSuchCell { row: 7, col: 7 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::WorkerGone.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
