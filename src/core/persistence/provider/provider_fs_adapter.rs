use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::provider_entity::ProviderEntity;
use super::provider_lookup_trait::ProviderLookup;

/// FS adapter for the provider registry.
///
/// The registry is a JSON array of [`ProviderEntity`] records. The file is
/// re-read on every lookup so sources registered after startup are visible
/// without a restart. A missing file is treated as an empty registry.
pub struct ProviderFsAdapter {
    path: PathBuf,
}

impl ProviderFsAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<ProviderEntity>> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            debug!(path = %self.path.display(), "Provider registry not found, treating as empty");
            return Ok(Vec::new());
        }

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read provider registry {}", self.path.display()))?;

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse provider registry {}", self.path.display()))
    }
}

#[async_trait]
impl ProviderLookup for ProviderFsAdapter {
    async fn lookup_provider(&self, uuid: &str) -> Result<Option<ProviderEntity>> {
        let providers = self.read_all().await?;
        Ok(providers.into_iter().find(|p| p.uuid == uuid))
    }
}
