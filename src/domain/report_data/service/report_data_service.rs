use std::sync::Arc;

use tracing::{info, warn};

use crate::core::feature_flag::feature_flag_trait::FeatureFlags;
use crate::core::persistence::provider::provider_lookup_trait::ProviderLookup;
use crate::core::queue::task_queue_trait::TaskQueue;
use crate::domain::report_data::dto::delete_request::DeleteRequest;
use crate::domain::report_data::dto::summarize_request::SummarizeRequest;
use crate::domain::report_data::error::ReportDataError;
use crate::domain::report_data::model::billing_period::expand_billing_periods;
use crate::domain::report_data::model::dispatched_job::DispatchedJob;

use super::job_dispatcher::JobDispatcher;
use super::queue_router::resolve_queue;
use super::request_validator::{validate_delete_request, validate_summarize_request, SummarizeScope};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportDataConfig {
    /// Allows `provider_uuid=*` requests that resummarize every provider.
    pub dev_mode: bool,
}

/// Entry point for summary and removal requests.
///
/// Holds no per-request state; concurrent calls are independent and
/// identical calls submit independent jobs.
pub struct ReportDataService {
    config: ReportDataConfig,
    providers: Arc<dyn ProviderLookup>,
    feature_flags: Arc<dyn FeatureFlags>,
    dispatcher: JobDispatcher,
}

impl ReportDataService {
    pub fn new(
        config: ReportDataConfig,
        providers: Arc<dyn ProviderLookup>,
        feature_flags: Arc<dyn FeatureFlags>,
        task_queue: Arc<dyn TaskQueue>,
    ) -> Self {
        Self {
            config,
            providers,
            dispatcher: JobDispatcher::new(task_queue, feature_flags.clone()),
            feature_flags,
        }
    }

    pub fn config(&self) -> ReportDataConfig {
        self.config
    }

    /// Validate, split into billing periods and queue the summary jobs.
    ///
    /// Returns the dispatched jobs in submission order.
    pub async fn summarize(&self, request: SummarizeRequest) -> Result<Vec<DispatchedJob>, ReportDataError> {
        let validated =
            validate_summarize_request(&request, self.providers.as_ref(), self.config.dev_mode).await?;

        let periods = expand_billing_periods(
            Some(validated.start_date.as_str()),
            validated.end_date.as_deref(),
            validated.invoice_month.as_deref(),
            validated.scope.provider_type(),
        )?;

        match &validated.scope {
            SummarizeScope::Provider(identity) => {
                let queue = resolve_queue(
                    validated.queue_override,
                    Some(identity.schema_name.as_str()),
                    self.feature_flags.as_ref(),
                );
                info!(
                    periods = periods.len(),
                    %queue,
                    start_date = %validated.start_date,
                    end_date = ?validated.end_date,
                    "Summarize request accepted"
                );
                self.dispatcher
                    .dispatch_summaries(identity, &periods, queue, validated.include_ocp_on_cloud)
                    .await
            }
            SummarizeScope::AllProviders { .. } => {
                warn!(
                    periods = periods.len(),
                    start_date = %validated.start_date,
                    end_date = ?validated.end_date,
                    "Resummarizing all providers"
                );
                self.dispatcher.dispatch_all_summaries(&periods).await
            }
        }
    }

    /// Validate and queue a single expired-data removal job.
    pub async fn delete(&self, request: DeleteRequest) -> Result<DispatchedJob, ReportDataError> {
        let validated = validate_delete_request(&request)?;
        self.dispatcher.dispatch_removal(&validated).await
    }
}
