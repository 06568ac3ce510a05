pub mod feature_flag;
pub mod logging;
pub mod persistence;
pub mod queue;
