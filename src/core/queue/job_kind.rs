use std::fmt;

use serde::{Deserialize, Serialize};

/// Kinds of background jobs this service submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    Summarize,
    ManagedOcpOnCloud,
    SummarizeAll,
    RemoveExpired,
}

impl JobKind {
    /// Task name the workers register the job under.
    pub fn task_name(&self) -> &'static str {
        match self {
            JobKind::Summarize => "masu.processor.tasks.update_summary_tables",
            JobKind::ManagedOcpOnCloud => "masu.processor.tasks.process_openshift_on_cloud_trino",
            JobKind::SummarizeAll => "masu.processor.tasks.update_all_summary_tables",
            JobKind::RemoveExpired => "masu.processor.tasks.remove_expired_data",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobKind::Summarize => "Summarize",
            JobKind::ManagedOcpOnCloud => "ManagedOcpOnCloud",
            JobKind::SummarizeAll => "SummarizeAll",
            JobKind::RemoveExpired => "RemoveExpired",
        };
        f.write_str(name)
    }
}
