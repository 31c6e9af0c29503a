//! Single-patient department recommendation.
//!
//! The resolver asks the text provider first and only trusts its answer if it
//! names a department from the allow-list. Anything else, including a missing
//! or failing provider, falls through to the symptom table.

use super::metrics;
use super::providers::{GenerationParams, ProviderError, TextProvider};
use super::rules::SymptomTable;
use super::TriageError;
use crate::models::{Department, PatientRecord};
use std::sync::Arc;
use thiserror::Error;

/// Where a recommendation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    Model,
    Rules,
}

impl RecommendationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationSource::Model => "model",
            RecommendationSource::Rules => "rules",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub department: Department,
    pub source: RecommendationSource,
}

/// Why a model suggestion could not be used.
#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("model suggestions are disabled")]
    Disabled,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("model returned no text")]
    EmptyResponse,

    #[error("model suggested a department outside the allow-list: {0:?}")]
    NotAllowed(String),
}

impl SuggestionError {
    /// Short, stable label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            SuggestionError::Disabled => "disabled",
            SuggestionError::Provider(e) => e.kind(),
            SuggestionError::EmptyResponse => "empty_response",
            SuggestionError::NotAllowed(_) => "not_allowed",
        }
    }
}

/// Render the triage prompt for one patient.
pub fn render_prompt(patient: &PatientRecord) -> String {
    let departments = Department::ALL
        .iter()
        .map(Department::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are a medical triage assistant. Given a patient with:\n\
         - Gender: {}\n\
         - Age: {}\n\
         - Symptoms: {}\n\
         Recommend the most appropriate medical department, choosing from: {}.\n\
         Return only the department name, nothing else.\n\
         If unsure, return 'General Medicine'.",
        patient.gender,
        patient.age,
        patient.symptoms_joined(),
        departments
    )
}

pub struct RecommendationResolver {
    table: Arc<SymptomTable>,
    provider: Option<Arc<dyn TextProvider>>,
    params: GenerationParams,
}

impl RecommendationResolver {
    pub fn new(
        table: Arc<SymptomTable>,
        provider: Option<Arc<dyn TextProvider>>,
        params: GenerationParams,
    ) -> Self {
        Self {
            table,
            provider,
            params,
        }
    }

    /// Resolver that only ever uses the symptom table.
    pub fn rules_only(table: Arc<SymptomTable>) -> Self {
        Self::new(table, None, GenerationParams::default())
    }

    pub fn model_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub fn table(&self) -> &SymptomTable {
        &self.table
    }

    /// Ask the provider for a department and validate the answer.
    pub async fn suggest(&self, patient: &PatientRecord) -> Result<Department, SuggestionError> {
        let provider = self.provider.as_ref().ok_or(SuggestionError::Disabled)?;

        let prompt = render_prompt(patient);
        let response = provider.generate(&prompt, &self.params).await?;

        tracing::debug!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            finish_reason = ?response.finish_reason,
            "Model suggestion received"
        );

        let text = response.text.unwrap_or_default();
        let candidate = text.trim();
        if candidate.is_empty() {
            return Err(SuggestionError::EmptyResponse);
        }

        candidate
            .parse::<Department>()
            .map_err(|_| SuggestionError::NotAllowed(candidate.to_string()))
    }

    /// Recommend a department for one patient.
    ///
    /// Fails only when the patient reports no symptoms.
    pub async fn resolve(&self, patient: &PatientRecord) -> Result<Recommendation, TriageError> {
        if !patient.has_symptoms() {
            return Err(TriageError::EmptySymptoms);
        }

        let recommendation = match self.suggest(patient).await {
            Ok(department) => Recommendation {
                department,
                source: RecommendationSource::Model,
            },
            Err(err) => {
                match &err {
                    SuggestionError::Disabled => {
                        tracing::debug!("Model disabled, using symptom rules")
                    }
                    _ => tracing::warn!(
                        error = %err,
                        reason = err.kind(),
                        "Model suggestion unusable, falling back to symptom rules"
                    ),
                }
                metrics::record_model_fallback(err.kind());

                Recommendation {
                    department: self.table.classify(&patient.symptoms),
                    source: RecommendationSource::Rules,
                }
            }
        };

        metrics::record_recommendation(recommendation.source.as_str(), recommendation.department);
        tracing::info!(
            department = %recommendation.department,
            source = recommendation.source.as_str(),
            symptom_count = patient.symptoms.len(),
            "Department recommended"
        );

        Ok(recommendation)
    }
}
