use crate::core::feature_flag::feature_flag_trait::FeatureFlags;
use crate::core::queue::queue_name::QueueName;

/// Queue for expired-data removal jobs.
pub const REMOVE_EXPIRED_QUEUE: QueueName = QueueName::Celery;

/// Queue for summaries that are not scoped to a customer.
pub const UNSCOPED_SUMMARY_QUEUE: QueueName = QueueName::Summary;

/// Pick the destination queue of a summarize request.
///
/// An explicit override has already been checked against the allow-list.
/// Otherwise the customer's priority queue is used, sized by its tier.
pub fn resolve_queue(
    explicit_override: Option<QueueName>,
    schema_name: Option<&str>,
    flags: &dyn FeatureFlags,
) -> QueueName {
    if let Some(queue) = explicit_override {
        return queue;
    }

    match schema_name {
        Some(schema) => QueueName::priority_for(flags.customer_tier(schema)),
        None => UNSCOPED_SUMMARY_QUEUE,
    }
}
