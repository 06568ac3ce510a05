use crate::core::persistence::provider::provider_type::ProviderType;
use crate::core::queue::queue_name::QueueTier;

/// Per-customer switches consulted while dispatching jobs.
pub trait FeatureFlags: Send + Sync {
    /// Whether a managed OCP-on-cloud job follows each summary job.
    fn is_managed_ocp_cloud_summary_enabled(&self, schema_name: &str, provider_type: ProviderType) -> bool;

    /// Sizing tier that selects the customer's default queue.
    fn customer_tier(&self, schema_name: &str) -> QueueTier;
}
