//! HTTP API for CAP classification
//!
//! Endpoints:
//! - GET /health - Health check
//! - POST /classify - Classify one `{word, sequence}`
//! - POST /classify/batch - Classify an array of them
//!
//! Stateless: nothing is written to the label store.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::core::CapClassifier;
use crate::types::{CapResult, ClassificationResult, LabelRecord, WordSequence};

/// App state
#[derive(Debug, Default)]
pub struct AppState {
    pub classifier: CapClassifier,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Classification response
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub word: String,
    pub result: ClassificationResult,
    pub record: LabelRecord,
}

/// Create the API router
pub fn create_router() -> Router {
    let state = Arc::new(AppState::default());

    Router::new()
        .route("/health", get(health))
        .route("/classify", post(classify))
        .route("/classify/batch", post(classify_batch))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<WordSequence>,
) -> Json<ClassifyResponse> {
    Json(respond(&state.classifier, &req))
}

async fn classify_batch(
    State(state): State<Arc<AppState>>,
    Json(req): Json<Vec<WordSequence>>,
) -> Json<Vec<ClassifyResponse>> {
    Json(req.iter().map(|w| respond(&state.classifier, w)).collect())
}

fn respond(classifier: &CapClassifier, word: &WordSequence) -> ClassifyResponse {
    let result = classifier.classify_word(word);
    let record = LabelRecord::from_result(&word.word, &result);
    ClassifyResponse {
        word: word.word.clone(),
        result,
        record,
    }
}

/// Run the API server
pub async fn run_server(addr: &str) -> CapResult<()> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "capsym API listening");
    axum::serve(listener, router).await?;
    Ok(())
}
