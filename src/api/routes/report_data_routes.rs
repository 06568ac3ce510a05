//! Report data routes (e.g., /api/v1/report_data)

use axum::{routing::get, Router};

use crate::api::controller::report_data::ReportDataController;
use crate::app_state::AppState;

pub fn report_data_routes() -> Router<AppState> {
    Router::new().route(
        "/report_data",
        get(ReportDataController::summarize).delete(ReportDataController::delete),
    )
}
