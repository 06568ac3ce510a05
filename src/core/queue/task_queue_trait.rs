use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::job_kind::JobKind;
use super::queue_name::QueueName;

/// Message published to the broker for one job submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobEnvelope {
    pub id: Uuid,
    pub task: String,
    pub kind: JobKind,
    pub queue: QueueName,
    pub kwargs: Value,
    pub submitted_at: DateTime<Utc>,
}

impl JobEnvelope {
    pub fn new(kind: JobKind, queue: QueueName, kwargs: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            task: kind.task_name().to_string(),
            kind,
            queue,
            kwargs,
            submitted_at: Utc::now(),
        }
    }
}

/// Submission side of the task broker.
///
/// `submit` resolves once the broker has accepted the job and returns its
/// tracking id. It never waits for the job to run.
#[async_trait]
pub trait TaskQueue: Send + Sync {
    async fn submit(&self, kind: JobKind, payload: Value, queue: QueueName) -> Result<String>;
}
