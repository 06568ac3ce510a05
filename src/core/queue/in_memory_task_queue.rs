use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::job_kind::JobKind;
use super::queue_name::QueueName;
use super::task_queue_trait::{JobEnvelope, TaskQueue};

/// Queue that keeps accepted jobs in process memory.
///
/// Used when no broker is configured (local development) and in tests.
/// Nothing consumes the jobs.
#[derive(Debug, Default)]
pub struct InMemoryTaskQueue {
    submitted: Mutex<Vec<JobEnvelope>>,
}

impl InMemoryTaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of accepted jobs in submission order.
    pub fn submitted(&self) -> Vec<JobEnvelope> {
        self.submitted
            .lock()
            .map(|jobs| jobs.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TaskQueue for InMemoryTaskQueue {
    async fn submit(&self, kind: JobKind, payload: Value, queue: QueueName) -> Result<String> {
        let envelope = JobEnvelope::new(kind, queue, payload);
        let tracking_id = envelope.id.to_string();

        self.submitted
            .lock()
            .map_err(|_| anyhow!("in-memory queue lock poisoned"))?
            .push(envelope);

        debug!(%kind, %queue, %tracking_id, "Job accepted by in-memory queue");
        Ok(tracking_id)
    }
}
