use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use super::provider_entity::ProviderEntity;
use super::provider_lookup_trait::ProviderLookup;

/// Fixed in-memory provider registry.
#[derive(Debug, Default, Clone)]
pub struct ProviderMemoryAdapter {
    providers: HashMap<String, ProviderEntity>,
}

impl ProviderMemoryAdapter {
    pub fn with_providers<I>(providers: I) -> Self
    where
        I: IntoIterator<Item = ProviderEntity>,
    {
        Self {
            providers: providers
                .into_iter()
                .map(|p| (p.uuid.clone(), p))
                .collect(),
        }
    }
}

#[async_trait]
impl ProviderLookup for ProviderMemoryAdapter {
    async fn lookup_provider(&self, uuid: &str) -> Result<Option<ProviderEntity>> {
        Ok(self.providers.get(uuid).cloned())
    }
}
