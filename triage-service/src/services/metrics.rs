//! Metrics collection and Prometheus export.
//!
//! Domain counters go through the `metrics` facade; until `init_metrics` has
//! installed the Prometheus recorder they are no-ops.

use crate::models::Department;
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Initialize the metrics recorder.
///
/// Safe to call more than once; only the first call installs the recorder.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| {
        PrometheusBuilder::new()
            .install_recorder()
            .expect("failed to install Prometheus recorder")
    });
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// Record a single-patient recommendation and where it came from.
pub fn record_recommendation(source: &'static str, department: Department) {
    counter!(
        "triage_recommendations_total",
        "source" => source,
        "department" => department.as_str()
    )
    .increment(1);
}

/// Record why the model suggestion was not used.
pub fn record_model_fallback(reason: &'static str) {
    counter!("triage_model_fallbacks_total", "reason" => reason).increment(1);
}

/// Record a patient seen by the batch endpoint (`counted` or `skipped`).
pub fn record_batch_patient(outcome: &'static str) {
    counter!("triage_batch_patients_total", "outcome" => outcome).increment(1);
}
