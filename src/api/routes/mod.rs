//! API route declarations (e.g., /api/v1/*)

pub mod report_data_routes;
