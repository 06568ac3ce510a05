use anyhow::{anyhow, Result};
use async_trait::async_trait;
use redis::{aio::ConnectionManager, Client};
use serde_json::Value;
use tracing::{debug, error, info};

use super::job_kind::JobKind;
use super::queue_name::QueueName;
use super::task_queue_trait::{JobEnvelope, TaskQueue};

/// Broker adapter that pushes job envelopes onto Redis lists, one list per queue.
#[derive(Clone)]
pub struct RedisTaskQueue {
    manager: ConnectionManager,
    prefix: String,
}

impl RedisTaskQueue {
    pub async fn connect(url: &str, prefix: impl Into<String>) -> Result<Self> {
        info!("Connecting to task broker");
        let client = Client::open(url)?;

        // ConnectionManager reconnects on its own after broker restarts
        let manager = client.get_connection_manager().await.map_err(|e| {
            error!("Failed to get Redis connection manager: {}", e);
            anyhow!("Failed to connect to task broker: {}", e)
        })?;

        info!("Task broker connection established");
        Ok(Self {
            manager,
            prefix: prefix.into(),
        })
    }

    pub async fn health_check(&self) -> Result<()> {
        let mut conn = self.manager.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| anyhow!("Task broker health check failed: {}", e))
    }
}

/// Redis list holding the pending jobs of one queue.
pub fn broker_list_key(prefix: &str, queue: QueueName) -> String {
    format!("{}:{}", prefix, queue.as_str())
}

#[async_trait]
impl TaskQueue for RedisTaskQueue {
    async fn submit(&self, kind: JobKind, payload: Value, queue: QueueName) -> Result<String> {
        let envelope = JobEnvelope::new(kind, queue, payload);
        let body = serde_json::to_string(&envelope)?;
        let key = broker_list_key(&self.prefix, queue);

        let mut conn = self.manager.clone();
        let depth: i64 = redis::cmd("LPUSH")
            .arg(&key)
            .arg(body)
            .query_async(&mut conn)
            .await
            .map_err(|e| anyhow!("Failed to publish {} job to {}: {}", kind, key, e))?;

        let tracking_id = envelope.id.to_string();
        debug!(%kind, %queue, %tracking_id, depth, "Job published to broker");
        Ok(tracking_id)
    }
}
