use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{error, info};

use crate::core::feature_flag::feature_flag_trait::FeatureFlags;
use crate::core::queue::job_kind::JobKind;
use crate::core::queue::queue_name::QueueName;
use crate::core::queue::task_queue_trait::TaskQueue;
use crate::domain::report_data::error::ReportDataError;
use crate::domain::report_data::model::billing_period::BillingPeriod;
use crate::domain::report_data::model::dispatched_job::DispatchedJob;
use crate::domain::report_data::model::provider_identity::ProviderIdentity;

use super::queue_router::{REMOVE_EXPIRED_QUEUE, UNSCOPED_SUMMARY_QUEUE};
use super::request_validator::ValidatedDelete;

pub const MANAGED_OCP_ON_CLOUD_LABEL: &str = "Managed OCP on Cloud";

/// Turns billing periods into broker submissions.
///
/// Submission only waits for the broker to accept a job. Jobs are sent in
/// period order and a chained job goes out right after its primary.
pub struct JobDispatcher {
    task_queue: Arc<dyn TaskQueue>,
    feature_flags: Arc<dyn FeatureFlags>,
}

impl JobDispatcher {
    pub fn new(task_queue: Arc<dyn TaskQueue>, feature_flags: Arc<dyn FeatureFlags>) -> Self {
        Self {
            task_queue,
            feature_flags,
        }
    }

    /// Submit one job. On failure the jobs in `accepted` move into the error.
    async fn submit(
        &self,
        kind: JobKind,
        payload: Value,
        queue: QueueName,
        label: String,
        tracing_id: Option<String>,
        accepted: &mut Vec<DispatchedJob>,
    ) -> Result<DispatchedJob, ReportDataError> {
        match self.task_queue.submit(kind, payload, queue).await {
            Ok(tracking_id) => Ok(DispatchedJob {
                label,
                tracking_id,
                kind,
                queue,
                tracing_id,
            }),
            Err(e) => {
                error!(%kind, %queue, accepted = accepted.len(), "Job submission failed: {:?}", e);
                Err(ReportDataError::DispatchFailed {
                    kind,
                    message: e.to_string(),
                    submitted: std::mem::take(accepted),
                })
            }
        }
    }

    /// One summary job per period, each optionally followed by a managed
    /// OCP-on-cloud job tagged with the summary's tracking id.
    pub async fn dispatch_summaries(
        &self,
        identity: &ProviderIdentity,
        periods: &[BillingPeriod],
        queue: QueueName,
        ocp_on_cloud: bool,
    ) -> Result<Vec<DispatchedJob>, ReportDataError> {
        // Checked with the provider's resolved type, so uuid-only requests are
        // gated on the registry type rather than on a missing request field.
        let chain_managed_ocp = self
            .feature_flags
            .is_managed_ocp_cloud_summary_enabled(&identity.schema_name, identity.provider_type);

        let mut dispatched = Vec::with_capacity(periods.len() * if chain_managed_ocp { 2 } else { 1 });

        for period in periods {
            let label = period.to_string();
            let primary = self
                .submit(
                    JobKind::Summarize,
                    summary_payload(identity, period, queue, ocp_on_cloud),
                    queue,
                    label.clone(),
                    None,
                    &mut dispatched,
                )
                .await?;
            let tracking_id = primary.tracking_id.clone();
            dispatched.push(primary);

            if chain_managed_ocp {
                let chained = self
                    .submit(
                        JobKind::ManagedOcpOnCloud,
                        managed_ocp_on_cloud_payload(identity, period, &tracking_id),
                        queue,
                        format!("{} {}", MANAGED_OCP_ON_CLOUD_LABEL, label),
                        Some(tracking_id),
                        &mut dispatched,
                    )
                    .await?;
                dispatched.push(chained);
            }
        }

        info!(
            schema_name = %identity.schema_name,
            provider_type = %identity.provider_type,
            %queue,
            jobs = dispatched.len(),
            "Summary jobs dispatched"
        );
        Ok(dispatched)
    }

    /// One unscoped summary job per period, always on the unscoped summary queue.
    pub async fn dispatch_all_summaries(&self, periods: &[BillingPeriod]) -> Result<Vec<DispatchedJob>, ReportDataError> {
        let queue = UNSCOPED_SUMMARY_QUEUE;
        let mut dispatched = Vec::with_capacity(periods.len());

        for period in periods {
            let payload = json!({
                "start_date": period.start,
                "end_date": period.end,
                "invoice_month": period.invoice_month,
            });
            let job = self
                .submit(
                    JobKind::SummarizeAll,
                    payload,
                    queue,
                    period.to_string(),
                    None,
                    &mut dispatched,
                )
                .await?;
            dispatched.push(job);
        }

        info!(%queue, jobs = dispatched.len(), "All-provider summary jobs dispatched");
        Ok(dispatched)
    }

    pub async fn dispatch_removal(&self, request: &ValidatedDelete) -> Result<DispatchedJob, ReportDataError> {
        info!(
            schema_name = %request.schema_name,
            provider_uuid = %request.provider_uuid,
            simulate = request.simulate,
            "Dispatching remove_expired_data job"
        );

        let payload = json!({
            "schema_name": request.schema_name,
            "provider": request.provider_type,
            "simulate": request.simulate,
            "provider_uuid": request.provider_uuid,
        });

        self.submit(
            JobKind::RemoveExpired,
            payload,
            REMOVE_EXPIRED_QUEUE,
            request.provider_uuid.clone(),
            None,
            &mut Vec::new(),
        )
        .await
    }
}

fn summary_payload(
    identity: &ProviderIdentity,
    period: &BillingPeriod,
    queue: QueueName,
    ocp_on_cloud: bool,
) -> Value {
    json!({
        "schema_name": identity.schema_name,
        "provider_type": identity.provider_type,
        "provider_uuid": identity.uuid,
        "start_date": period.start,
        "end_date": period.end,
        "invoice_month": period.invoice_month,
        "queue_name": queue,
        "ocp_on_cloud": ocp_on_cloud,
    })
}

fn managed_ocp_on_cloud_payload(identity: &ProviderIdentity, period: &BillingPeriod, tracing_id: &str) -> Value {
    let report = json!({
        "schema_name": identity.schema_name,
        "provider_type": identity.provider_type,
        "provider_uuid": identity.uuid,
        "tracing_id": tracing_id,
        "start": period.start,
        "end": period.end,
        "invoice_month": period.invoice_month,
    });

    json!({
        "reports": [report],
        "provider_type": identity.provider_type,
        "schema_name": identity.schema_name,
        "provider_uuid": identity.uuid,
        "tracing_id": tracing_id,
        "masu_api_trigger": true,
    })
}
