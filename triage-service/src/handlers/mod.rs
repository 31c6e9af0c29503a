//! HTTP handlers for triage-service.

pub mod health;
pub mod recommend;
pub mod stats;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use recommend::recommend_department;
pub use stats::department_stats;
