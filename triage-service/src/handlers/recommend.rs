use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::dtos::{RecommendRequest, RecommendResponse};
use crate::startup::AppState;

#[tracing::instrument(skip(state, request), fields(symptom_count = request.symptoms.len()))]
pub async fn recommend_department(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let recommendation = state.resolver.resolve(&request).await?;

    Ok(Json(RecommendResponse {
        recommended_department: recommendation.department,
    }))
}
