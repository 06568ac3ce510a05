use serde::Serialize;

use crate::core::queue::job_kind::JobKind;
use crate::core::queue::queue_name::QueueName;

/// One job accepted by the broker while handling a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchedJob {
    /// Billing period label, or a prefixed label for chained jobs.
    pub label: String,
    pub tracking_id: String,
    pub kind: JobKind,
    pub queue: QueueName,

    /// Tracking id of the primary job a chained job was derived from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracing_id: Option<String>,
}
