//! Report data API DTOs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::report_data::dto::delete_request::DeleteRequest;
use crate::domain::report_data::dto::summarize_request::SummarizeRequest;
use crate::domain::report_data::model::dispatched_job::DispatchedJob;

pub const REPORT_DATA_KEY: &str = "Report Data Task IDs";
pub const REPORT_DATA_DELETE_KEY: &str = "Report Data Task ID";

/// Query string of `GET /report_data`.
///
/// Tokens are passed through untouched; the domain validator owns the
/// order in which they are checked.
#[derive(Deserialize, Debug, Default)]
pub struct ReportDataQuery {
    pub provider_uuid: Option<String>,
    pub provider_type: Option<String>,

    #[serde(alias = "schema_name")]
    pub schema: Option<String>,

    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub invoice_month: Option<String>,
    pub queue: Option<String>,

    /// `"true"` / `"false"`, defaults to true.
    pub ocp_on_cloud: Option<String>,
}

impl From<ReportDataQuery> for SummarizeRequest {
    fn from(value: ReportDataQuery) -> Self {
        Self {
            provider_uuid: value.provider_uuid,
            provider_type: value.provider_type,
            schema_name: value.schema,
            start_date: value.start_date,
            end_date: value.end_date,
            invoice_month: value.invoice_month,
            queue_override: value.queue,
            ocp_on_cloud: value.ocp_on_cloud,
        }
    }
}

/// Query string of `DELETE /report_data`.
#[derive(Deserialize, Debug, Default)]
pub struct ReportDataDeleteQuery {
    #[serde(alias = "schema_name")]
    pub schema: Option<String>,

    #[serde(alias = "provider_type")]
    pub provider: Option<String>,

    pub provider_uuid: Option<String>,

    pub simulate: Option<String>,
}

impl From<ReportDataDeleteQuery> for DeleteRequest {
    fn from(value: ReportDataDeleteQuery) -> Self {
        Self {
            schema_name: value.schema,
            provider_type: value.provider,
            provider_uuid: value.provider_uuid,
            simulate: value.simulate,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ReportDataResponse {
    #[serde(rename = "Report Data Task IDs")]
    pub task_ids: Vec<Value>,
}

impl ReportDataResponse {
    /// One `{label: tracking_id}` object per job, in submission order.
    pub fn from_jobs(jobs: &[DispatchedJob]) -> Self {
        let task_ids = jobs
            .iter()
            .map(|job| {
                let mut entry = Map::new();
                entry.insert(job.label.clone(), Value::String(job.tracking_id.clone()));
                Value::Object(entry)
            })
            .collect();
        Self { task_ids }
    }
}

#[derive(Serialize, Debug)]
pub struct ReportDataDeleteResponse {
    #[serde(rename = "Report Data Task ID")]
    pub task_id: String,
}
