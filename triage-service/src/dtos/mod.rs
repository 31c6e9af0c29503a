use crate::models::{Department, PatientRecord};
use crate::services::DepartmentCounts;
use serde::{Deserialize, Serialize};

/// Body of `POST /recommend`.
pub type RecommendRequest = PatientRecord;

/// Body of `POST /stats`.
pub type StatsRequest = Vec<PatientRecord>;

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommended_department: Department,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub department_counts: DepartmentCounts,
}
