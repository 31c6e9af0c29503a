use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::{StatsRequest, StatsResponse};
use crate::startup::AppState;

#[tracing::instrument(skip(state, patients), fields(patient_count = patients.len()))]
pub async fn department_stats(
    State(state): State<AppState>,
    Json(patients): Json<StatsRequest>,
) -> Result<Json<StatsResponse>, AppError> {
    let department_counts = state.aggregator.aggregate(&patients)?;

    Ok(Json(StatsResponse { department_counts }))
}
