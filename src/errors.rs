use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::domain::report_data::error::{ReportDataError, ValidationError};
use crate::domain::report_data::model::dispatched_job::DispatchedJob;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("{0}")]
    Validation(ValidationError),

    #[error("Task broker error: {message}")]
    DispatchFailed {
        message: String,
        submitted: Vec<DispatchedJob>,
    },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<ReportDataError> for AppError {
    fn from(err: ReportDataError) -> Self {
        let message = err.to_string();
        match err {
            ReportDataError::Validation(e) => AppError::Validation(e),
            ReportDataError::ProviderLookupFailed(_) => AppError::InternalServerError(message),
            ReportDataError::DispatchFailed { submitted, .. } => {
                AppError::DispatchFailed { message, submitted }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Choose status codes per variant
        let status = match self {
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::DispatchFailed { .. } => StatusCode::BAD_GATEWAY,
        };

        let body = match &self {
            AppError::Validation(e) => json!({
                "message": e.message,
                "code": e.code,
            }),
            AppError::DispatchFailed { submitted, .. } => {
                let accepted: Vec<Value> = submitted
                    .iter()
                    .map(|job| {
                        let mut entry = Map::new();
                        entry.insert(job.label.clone(), Value::String(job.tracking_id.clone()));
                        Value::Object(entry)
                    })
                    .collect();
                json!({
                    "message": self.to_string(),
                    "code": "DISPATCH_FAILED",
                    "submitted": accepted,
                })
            }
            // String provided by thiserror → safe JSON message
            _ => json!({
                "message": self.to_string()
            }),
        };

        (status, Json(body)).into_response()
    }
}
