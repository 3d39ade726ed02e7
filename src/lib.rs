pub mod analysis;
pub mod config;
pub mod report;
pub mod scheduler;
pub mod viewer;
pub mod workload;
