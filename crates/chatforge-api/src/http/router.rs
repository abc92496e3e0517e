//! Axum router configuration with middleware.
//!
//! Routes follow the canonical bot-service contract: `/bots` carries the
//! full CRUD set (PUT and DELETE take the id in the JSON body), leads and
//! messages are read-only per-bot listings, and `/bots/{id}/embed` renders
//! the widget snippet. Middleware: permissive CORS (the dashboard and the
//! widget are served from other origins) and request tracing.

use axum::http::{header, Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/bots",
            get(handlers::bot::list_bots)
                .post(handlers::bot::create_bot)
                .put(handlers::bot::update_bot)
                .delete(handlers::bot::delete_bot),
        )
        .route("/bots/{id}/embed", get(handlers::embed::get_embed))
        .route("/leads/{bot_id}", get(handlers::lead::list_leads))
        .route("/messages/{bot_id}", get(handlers::message::list_messages))
        .route("/health", get(health_check))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any unsupported method on a known path.
async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
