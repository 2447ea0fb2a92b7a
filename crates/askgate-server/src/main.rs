//! AskGate — grounded Q&A gateway over conference records.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use askgate_core::GatewayConfig;
use askgate_llm::{LlmClient, LlmConfig};
use askgate_server::dataset::HttpRecordSource;
use askgate_server::{routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::from_env();
    let port = config.port;

    // Backend clients are built once and reused read-only across requests.
    let llm = LlmClient::new(LlmConfig::from_env());
    let (gemini, qwen) = (llm.gemini_configured(), llm.qwen_configured());
    let records = HttpRecordSource::new(config.dataset_url.clone());

    let state = Arc::new(
        AppState::new(config, Arc::new(records), Arc::new(llm)).with_backend_status(gemini, qwen),
    );

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("AskGate listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
