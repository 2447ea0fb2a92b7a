//! The ask endpoint — the request-orchestration pipeline.
//!
//! validate → fetch dataset → build grounding prompt → dispatch to the
//! selected backend → envelope the answer. Dataset failures are absorbed
//! upstream (empty dataset, no-data template); only validation and backend
//! failures surface to the caller.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use askgate_llm::ModelBackend;

use crate::context::ContextBuilder;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ask", post(ask))
        .route("/health", get(health))
}

/// Inbound ask payload. `prompt` defaults to empty so a missing field and an
/// empty one get the same 400.
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(rename = "modelType")]
    pub model_type: Option<String>,
}

async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AskRequest>,
) -> impl IntoResponse {
    let question = req.prompt.trim();
    if question.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "prompt must not be empty" })),
        );
    }

    let backend = ModelBackend::from_selector(req.model_type.as_deref());

    // Fetch failures are already absorbed; this step cannot fail.
    let records = state.records.fetch().await;
    let prompt = ContextBuilder::new(state.config.context_record_cap).build(&records, question);

    info!(%backend, records = records.len(), "dispatching grounded prompt");

    match state.llm.complete(&prompt, backend).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(serde_json::json!({ "response": answer })),
        ),
        Err(e) => {
            error!(%backend, error = %e, "backend call failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": format!("server error: {e}") })),
            )
        }
    }
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "geminiConfigured": state.gemini_configured,
        "qwenConfigured": state.qwen_configured,
    }))
}
