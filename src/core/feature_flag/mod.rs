//! Customer feature flags and queue tiers

pub mod config_feature_flags;
pub mod feature_flag_trait;
pub mod schema_matcher;
