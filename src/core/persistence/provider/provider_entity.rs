use serde::{Deserialize, Serialize};

use super::provider_type::ProviderType;

/// A registered cost data source and the tenant schema that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEntity {
    pub uuid: String,

    #[serde(rename = "type")]
    pub provider_type: ProviderType,

    /// Tenant schema of the customer account the source belongs to.
    pub schema_name: String,

    #[serde(default)]
    pub name: Option<String>,
}
