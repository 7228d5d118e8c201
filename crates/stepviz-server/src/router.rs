//! Router assembly for the stepviz HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive (the visualizer frontend runs on its own origin).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Selector listing for frontend dropdowns
        .route("/algorithms", get(handlers::algorithms::list_algorithms))
        // Trace generation
        .route("/trace/sort", post(handlers::sort::trace_sort))
        .route("/trace/path", post(handlers::path::trace_path))
        // Seeded demo input generation
        .route("/generate/values", post(handlers::generate::generate_values))
        .route("/generate/walls", post(handlers::generate::generate_walls))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
