pub mod job_dispatcher;
pub mod queue_router;
pub mod report_data_service;
pub mod request_validator;
