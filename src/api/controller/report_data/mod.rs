//! Report data controller: connects routes to the summary / removal usecases

use axum::extract::{Query, State};
use axum::Json;
use tracing::info;

use crate::api::dto::report_data_dto::{
    ReportDataDeleteQuery, ReportDataDeleteResponse, ReportDataQuery, ReportDataResponse,
};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct ReportDataController;

impl ReportDataController {
    pub async fn summarize(
        State(state): State<AppState>,
        Query(query): Query<ReportDataQuery>,
    ) -> Result<Json<ApiResponse<ReportDataResponse>>, AppError> {
        to_json(
            state
                .report_data_service
                .summarize(query.into())
                .await
                .map(|jobs| ReportDataResponse::from_jobs(&jobs)),
        )
    }

    pub async fn delete(
        State(state): State<AppState>,
        Query(query): Query<ReportDataDeleteQuery>,
    ) -> Result<Json<ApiResponse<ReportDataDeleteResponse>>, AppError> {
        info!("Calling remove_expired_data async task.");
        to_json(
            state
                .report_data_service
                .delete(query.into())
                .await
                .map(|job| ReportDataDeleteResponse {
                    task_id: job.tracking_id,
                }),
        )
    }
}
