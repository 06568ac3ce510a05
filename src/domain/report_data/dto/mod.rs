pub mod delete_request;
pub mod summarize_request;
