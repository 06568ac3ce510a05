//! Provider registry access (type + owning schema per source uuid)

pub mod provider_entity;
pub mod provider_fs_adapter;
pub mod provider_lookup_trait;
pub mod provider_memory_adapter;
pub mod provider_type;
