//! Domain models for the triage service.

pub mod department;
pub mod patient;

pub use department::{Department, UnknownDepartment};
pub use patient::PatientRecord;
