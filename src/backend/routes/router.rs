/**
 * Router Configuration
 *
 * Combines the API routes, the health check and the fallback into one Axum
 * router, and wraps it in the middleware stack.
 *
 * # Layers (outermost first)
 *
 * 1. `TraceLayer` - one span per request
 * 2. `session_middleware` - attaches the verified `Identity`, if any
 */

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::conversion::not_found;
use crate::backend::middleware::session_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// ## Routes
///
/// - `/api/...` - see `api_routes`
/// - `GET /health` - liveness check
///
/// Unknown routes get a JSON 404.
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .nest("/api", configure_api_routes())
        .route("/health", get(health))
        .fallback(not_found)
        .layer(from_fn_with_state(app_state.clone(), session_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
