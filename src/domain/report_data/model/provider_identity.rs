use serde::Serialize;

use crate::core::persistence::provider::provider_entity::ProviderEntity;
use crate::core::persistence::provider::provider_type::ProviderType;

/// Provider scope of a validated summarize request.
///
/// `uuid` is absent when the request named only a provider type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderIdentity {
    pub uuid: Option<String>,
    pub provider_type: ProviderType,
    pub schema_name: String,
}

impl From<ProviderEntity> for ProviderIdentity {
    fn from(value: ProviderEntity) -> Self {
        Self {
            uuid: Some(value.uuid),
            provider_type: value.provider_type,
            schema_name: value.schema_name,
        }
    }
}
