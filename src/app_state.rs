use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::persistence::provider::provider_fs_adapter::ProviderFsAdapter;
use crate::core::queue::in_memory_task_queue::InMemoryTaskQueue;
use crate::core::queue::redis_task_queue::RedisTaskQueue;
use crate::core::queue::task_queue_trait::TaskQueue;
use crate::domain::report_data::service::report_data_service::{ReportDataConfig, ReportDataService};

#[derive(Clone)]
pub struct AppState {
    pub report_data_service: Arc<ReportDataService>,
}

impl AppState {
    pub fn new(report_data_service: Arc<ReportDataService>) -> Self {
        Self { report_data_service }
    }
}

/// Wire collaborators from configuration.
pub async fn build_app_state(config: &AppConfig) -> Result<AppState> {
    let task_queue: Arc<dyn TaskQueue> = match &config.broker_url {
        Some(url) => {
            let queue = RedisTaskQueue::connect(url, config.broker_queue_prefix.clone()).await?;
            queue.health_check().await?;
            Arc::new(queue)
        }
        None => {
            warn!("COSTSUM_BROKER_URL not set; jobs are kept in memory and never executed");
            Arc::new(InMemoryTaskQueue::new())
        }
    };

    let providers = ProviderFsAdapter::new(config.providers_file.clone());
    info!(path = %providers.path().display(), "Using provider registry");

    if config.development {
        warn!("Development mode enabled: all-provider summaries are allowed");
    }

    let service = ReportDataService::new(
        ReportDataConfig {
            dev_mode: config.development,
        },
        Arc::new(providers),
        Arc::new(config.feature_flags.clone()),
        task_queue,
    );

    Ok(AppState::new(Arc::new(service)))
}
