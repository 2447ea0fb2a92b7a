//! HTTP route handlers — matches the original Express API surface.

pub mod ask;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::state::AppState;

/// Build the main Axum router with the origin gate applied.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);
    Router::new()
        .nest("/api", api_routes())
        .layer(cors)
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new().merge(ask::routes())
}

/// Origin gate. Allow-listed origins (exact match) get permissive headers
/// and credentials; other origins get no Allow-Origin header and the browser
/// blocks the read — the request itself is not failed. Preflight OPTIONS is
/// answered here with 200 and no body before any handler runs.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                // A misconfigured origin must never take the process down.
                warn!(%origin, "skipping unparseable allowed origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
