//! Summary and expired-data removal request orchestration

pub mod dto;
pub mod error;
pub mod model;
pub mod service;
