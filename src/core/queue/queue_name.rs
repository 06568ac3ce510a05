use std::fmt;

use serde::{Deserialize, Serialize};

/// Worker queues known to the task broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueName {
    Celery,
    Download,
    DownloadXl,
    DownloadPenalty,
    Ocp,
    OcpXl,
    OcpPenalty,
    Priority,
    PriorityXl,
    PriorityPenalty,
    Refresh,
    RefreshXl,
    RefreshPenalty,
    Summary,
    SummaryXl,
    SummaryPenalty,
    CostModel,
    CostModelXl,
    CostModelPenalty,
    Hcs,
    SubsExtraction,
    SubsTransmission,
}

/// Every queue a request may target explicitly.
pub const QUEUE_ALLOW_LIST: [QueueName; 22] = [
    QueueName::Celery,
    QueueName::Download,
    QueueName::DownloadXl,
    QueueName::DownloadPenalty,
    QueueName::Ocp,
    QueueName::OcpXl,
    QueueName::OcpPenalty,
    QueueName::Priority,
    QueueName::PriorityXl,
    QueueName::PriorityPenalty,
    QueueName::Refresh,
    QueueName::RefreshXl,
    QueueName::RefreshPenalty,
    QueueName::Summary,
    QueueName::SummaryXl,
    QueueName::SummaryPenalty,
    QueueName::CostModel,
    QueueName::CostModelXl,
    QueueName::CostModelPenalty,
    QueueName::Hcs,
    QueueName::SubsExtraction,
    QueueName::SubsTransmission,
];

/// Customer sizing used to pick between a queue and its xl / penalty variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueTier {
    #[default]
    Standard,
    Large,
    Penalty,
}

impl QueueName {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueName::Celery => "celery",
            QueueName::Download => "download",
            QueueName::DownloadXl => "download_xl",
            QueueName::DownloadPenalty => "download_penalty",
            QueueName::Ocp => "ocp",
            QueueName::OcpXl => "ocp_xl",
            QueueName::OcpPenalty => "ocp_penalty",
            QueueName::Priority => "priority",
            QueueName::PriorityXl => "priority_xl",
            QueueName::PriorityPenalty => "priority_penalty",
            QueueName::Refresh => "refresh",
            QueueName::RefreshXl => "refresh_xl",
            QueueName::RefreshPenalty => "refresh_penalty",
            QueueName::Summary => "summary",
            QueueName::SummaryXl => "summary_xl",
            QueueName::SummaryPenalty => "summary_penalty",
            QueueName::CostModel => "cost_model",
            QueueName::CostModelXl => "cost_model_xl",
            QueueName::CostModelPenalty => "cost_model_penalty",
            QueueName::Hcs => "hcs",
            QueueName::SubsExtraction => "subs_extraction",
            QueueName::SubsTransmission => "subs_transmission",
        }
    }

    /// Exact, case-sensitive lookup against [`QUEUE_ALLOW_LIST`].
    pub fn from_name(name: &str) -> Option<Self> {
        QUEUE_ALLOW_LIST.iter().copied().find(|q| q.as_str() == name)
    }

    /// Priority queue variant for a customer tier.
    pub fn priority_for(tier: QueueTier) -> Self {
        match tier {
            QueueTier::Standard => QueueName::Priority,
            QueueTier::Large => QueueName::PriorityXl,
            QueueTier::Penalty => QueueName::PriorityPenalty,
        }
    }

    /// Comma separated allow-list, used in error messages.
    pub fn allow_list_display() -> String {
        QUEUE_ALLOW_LIST
            .iter()
            .map(|q| q.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for QueueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
