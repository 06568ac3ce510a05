use tracing::debug;

use crate::core::persistence::provider::provider_type::ProviderType;
use crate::core::queue::queue_name::QueueTier;

use super::feature_flag_trait::FeatureFlags;
use super::schema_matcher::SchemaMatcher;

/// Feature flags backed by static schema lists from configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigFeatureFlags {
    pub managed_ocp_on_cloud: SchemaMatcher,
    pub large_customers: SchemaMatcher,
    pub penalty_customers: SchemaMatcher,
}

impl FeatureFlags for ConfigFeatureFlags {
    fn is_managed_ocp_cloud_summary_enabled(&self, schema_name: &str, provider_type: ProviderType) -> bool {
        let enabled = provider_type.is_cloud() && self.managed_ocp_on_cloud.matches(schema_name);
        debug!(schema_name, %provider_type, enabled, "managed OCP on cloud flag");
        enabled
    }

    fn customer_tier(&self, schema_name: &str) -> QueueTier {
        // large wins when a schema is listed in both
        if self.large_customers.matches(schema_name) {
            QueueTier::Large
        } else if self.penalty_customers.matches(schema_name) {
            QueueTier::Penalty
        } else {
            QueueTier::Standard
        }
    }
}
