use service_core::error::AppError;
use thiserror::Error;

/// Input errors raised by the resolver and aggregator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriageError {
    #[error("Symptoms list cannot be empty")]
    EmptySymptoms,

    #[error("Patient list cannot be empty")]
    EmptyBatch,
}

impl From<TriageError> for AppError {
    fn from(err: TriageError) -> Self {
        AppError::BadRequest(anyhow::Error::new(err))
    }
}
