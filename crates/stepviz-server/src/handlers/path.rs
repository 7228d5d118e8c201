//! Path-trace handler.

use axum::extract::State;
use axum::Json;

use stepviz_core::{GridConfig, PathAlgorithm};
use stepviz_trace::PathStepTracer;

use crate::error::ApiError;
use crate::schema::path::{PathTraceRequest, PathTraceResponse};
use crate::state::AppState;

/// Computes a full pathfinding trace on a fresh grid.
///
/// `POST /trace/path`
///
/// Start and end must lie inside the effective grid; the tracer's behavior
/// is undefined outside it, so this surface rejects such requests with 400.
pub async fn trace_path(
    State(state): State<AppState>,
    Json(req): Json<PathTraceRequest>,
) -> Result<Json<PathTraceResponse>, ApiError> {
    let config = GridConfig {
        rows: req.rows.unwrap_or(state.grid.rows),
        cols: req.cols.unwrap_or(state.grid.cols),
    };
    config.validate()?;
    config.check_bounds(req.start)?;
    config.check_bounds(req.end)?;

    let algorithm = PathAlgorithm::from_id(&req.algorithm);
    let steps = PathStepTracer::new(config).run(algorithm, req.start, req.end, &req.walls);
    let path_found = steps.last().is_some_and(|s| !s.path.is_empty());

    Ok(Json(PathTraceResponse {
        algorithm: algorithm.id().to_string(),
        step_count: steps.len(),
        path_found,
        steps,
    }))
}
