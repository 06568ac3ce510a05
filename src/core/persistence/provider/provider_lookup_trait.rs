use anyhow::Result;
use async_trait::async_trait;

use super::provider_entity::ProviderEntity;

/// Read-only access to registered providers.
#[async_trait]
pub trait ProviderLookup: Send + Sync {
    /// Returns `Ok(None)` when no provider has the given uuid.
    async fn lookup_provider(&self, uuid: &str) -> Result<Option<ProviderEntity>>;
}
