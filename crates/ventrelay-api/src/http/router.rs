//! Axum router configuration with middleware.
//!
//! Chat routes live under `/api/chat`; `/health` is a liveness probe.
//! Middleware: CORS, request tracing.

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/chat",
            get(handlers::chat::get_chat_history).post(handlers::chat::post_chat),
        )
        .route("/chat/session", get(handlers::chat::get_chat_session));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "canister_id": state.config.backend.canister_id,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
