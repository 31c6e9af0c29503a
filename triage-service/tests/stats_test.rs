mod common;

use axum::http::StatusCode;
use common::{post_json, router};
use serde_json::json;
use std::sync::Arc;
use triage_service::services::providers::mock::MockTextProvider;
use triage_service::services::providers::TextProvider;

#[tokio::test]
async fn empty_batch_is_a_bad_request() {
    let (status, body) = post_json(router(None), "/stats", json!([])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Patient list cannot be empty");
}

#[tokio::test]
async fn patients_without_symptoms_are_skipped() {
    let (status, body) = post_json(
        router(None),
        "/stats",
        json!([
            { "gender": "male", "age": 45, "symptoms": ["batuk"] },
            { "gender": "female", "age": 30, "symptoms": [] }
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "department_counts": { "Pulmonology": 1 } }));
}

#[tokio::test]
async fn all_skipped_returns_empty_counts() {
    let (status, body) = post_json(
        router(None),
        "/stats",
        json!([{ "gender": "female", "age": 30, "symptoms": [] }]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "department_counts": {} }));
}

#[tokio::test]
async fn counts_one_department_per_patient() {
    let (status, body) = post_json(
        router(None),
        "/stats",
        json!([
            { "gender": "male", "age": 45, "symptoms": ["pusing", "mual", "pusing"] },
            { "gender": "female", "age": 19, "symptoms": ["susah tidur"] },
            { "gender": "female", "age": 64, "symptoms": ["sakit kepala"] },
            { "gender": "male", "age": 12, "symptoms": ["demam"] }
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["department_counts"],
        json!({ "Neurology": 2, "Psychiatry": 1, "General Medicine": 1 })
    );
}

#[tokio::test]
async fn batch_never_consults_the_model() {
    let mock = Arc::new(MockTextProvider::replying("Cardiology"));
    let provider: Arc<dyn TextProvider> = mock.clone();

    let (status, body) = post_json(
        router(Some(provider)),
        "/stats",
        json!([{ "gender": "male", "age": 45, "symptoms": ["batuk"] }]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department_counts"], json!({ "Pulmonology": 1 }));
    assert_eq!(mock.calls(), 0);
}
