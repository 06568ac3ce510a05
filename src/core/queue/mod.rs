//! Task broker plumbing: queue names, job kinds and submission adapters

pub mod in_memory_task_queue;
pub mod job_kind;
pub mod queue_name;
pub mod redis_task_queue;
pub mod task_queue_trait;
