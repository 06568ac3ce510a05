pub mod report_data;
