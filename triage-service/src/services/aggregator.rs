//! Batch department statistics.

use super::metrics;
use super::rules::SymptomTable;
use super::TriageError;
use crate::models::{Department, PatientRecord};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Number of patients assigned to each department.
pub type DepartmentCounts = BTreeMap<Department, u64>;

/// Counts rule-based recommendations over a batch of patients.
///
/// The batch path never consults the text provider.
#[derive(Debug, Clone)]
pub struct Aggregator {
    table: Arc<SymptomTable>,
}

impl Aggregator {
    pub fn new(table: Arc<SymptomTable>) -> Self {
        Self { table }
    }

    pub fn aggregate(&self, patients: &[PatientRecord]) -> Result<DepartmentCounts, TriageError> {
        if patients.is_empty() {
            return Err(TriageError::EmptyBatch);
        }

        let mut counts = DepartmentCounts::new();
        let mut skipped = 0usize;
        for patient in patients {
            if !patient.has_symptoms() {
                skipped += 1;
                metrics::record_batch_patient("skipped");
                continue;
            }

            let department = self.table.classify(&patient.symptoms);
            *counts.entry(department).or_insert(0) += 1;
            metrics::record_batch_patient("counted");
        }

        tracing::info!(
            patients = patients.len(),
            skipped,
            departments = counts.len(),
            "Batch aggregated"
        );

        Ok(counts)
    }
}
