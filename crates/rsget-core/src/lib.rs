pub mod config;
pub mod logging;

// Core modules
pub mod batch;
pub mod fetch;
pub mod log_sink;
pub mod naming;
pub mod storage;
