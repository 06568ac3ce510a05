use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::core::feature_flag::config_feature_flags::ConfigFeatureFlags;
use crate::core::feature_flag::schema_matcher::SchemaMatcher;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_QUEUE_PREFIX: &str = "costsum";

/// Runtime configuration read from `COSTSUM_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Enables development-only behaviour such as all-provider summaries.
    pub development: bool,
    /// Redis URL of the task broker; jobs stay in memory when unset.
    pub broker_url: Option<String>,
    pub broker_queue_prefix: String,
    pub providers_file: PathBuf,
    pub log_dir: PathBuf,
    pub feature_flags: ConfigFeatureFlags,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let development = match get("COSTSUM_DEVELOPMENT") {
            Some(raw) => parse_env_bool("COSTSUM_DEVELOPMENT", &raw)?,
            None => false,
        };

        let schemas = |key: &str| get(key).map(|raw| SchemaMatcher::parse(&raw)).unwrap_or_default();

        Ok(Self {
            bind_addr: get("COSTSUM_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            development,
            broker_url: get("COSTSUM_BROKER_URL"),
            broker_queue_prefix: get("COSTSUM_BROKER_QUEUE_PREFIX")
                .unwrap_or_else(|| DEFAULT_QUEUE_PREFIX.to_string()),
            providers_file: get("COSTSUM_PROVIDERS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/providers.json")),
            log_dir: get("COSTSUM_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            feature_flags: ConfigFeatureFlags {
                managed_ocp_on_cloud: schemas("COSTSUM_MANAGED_OCP_ON_CLOUD_SCHEMAS"),
                large_customers: schemas("COSTSUM_LARGE_CUSTOMER_SCHEMAS"),
                penalty_customers: schemas("COSTSUM_PENALTY_CUSTOMER_SCHEMAS"),
            },
        })
    }
}

fn parse_env_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => bail!("{} must be a boolean, got '{}'", key, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert!(!config.development);
        assert!(config.broker_url.is_none());
        assert_eq!(config.broker_queue_prefix, "costsum");
        assert_eq!(config.providers_file, PathBuf::from("data/providers.json"));
        assert_eq!(config.feature_flags.managed_ocp_on_cloud, SchemaMatcher::Nothing);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("COSTSUM_DEVELOPMENT", "True"),
            ("COSTSUM_BROKER_URL", "redis://localhost:6379/0"),
            ("COSTSUM_MANAGED_OCP_ON_CLOUD_SCHEMAS", "*"),
            ("COSTSUM_LARGE_CUSTOMER_SCHEMAS", "org1, org2"),
            ("COSTSUM_LOG_DIR", "/var/log/costsum"),
        ])
        .unwrap();

        assert!(config.development);
        assert_eq!(config.broker_url.as_deref(), Some("redis://localhost:6379/0"));
        assert_eq!(config.feature_flags.managed_ocp_on_cloud, SchemaMatcher::All);
        assert!(config.feature_flags.large_customers.matches("org2"));
        assert_eq!(config.log_dir, PathBuf::from("/var/log/costsum"));
    }

    #[test]
    fn rejects_malformed_development_flag() {
        assert!(config_from(&[("COSTSUM_DEVELOPMENT", "sometimes")]).is_err());
    }
}
