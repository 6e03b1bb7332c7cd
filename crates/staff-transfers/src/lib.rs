pub mod config;
pub mod error;
pub mod staffing;
pub mod telemetry;
