pub mod billing_period;
pub mod dispatched_job;
pub mod invoice_month;
pub mod provider_identity;
