//! Demo input generation handlers.

use axum::extract::State;
use axum::Json;

use stepviz_core::GridConfig;
use stepviz_trace::gen::entropy_seed;
use stepviz_trace::InputGen;

use crate::error::ApiError;
use crate::schema::generate::{
    GenerateValuesRequest, GenerateValuesResponse, GenerateWallsRequest, GenerateWallsResponse,
};
use crate::state::AppState;

/// Generates a random sort input, echoing the seed for reproducibility.
///
/// `POST /generate/values`
pub async fn generate_values(
    Json(req): Json<GenerateValuesRequest>,
) -> Json<GenerateValuesResponse> {
    let seed = req.seed.unwrap_or_else(entropy_seed);
    let values = InputGen::from_seed(seed).values(req.size);
    Json(GenerateValuesResponse { values, seed })
}

/// Generates a random wall layout that never covers start or end.
///
/// `POST /generate/walls`
pub async fn generate_walls(
    State(state): State<AppState>,
    Json(req): Json<GenerateWallsRequest>,
) -> Result<Json<GenerateWallsResponse>, ApiError> {
    let config = GridConfig {
        rows: req.rows.unwrap_or(state.grid.rows),
        cols: req.cols.unwrap_or(state.grid.cols),
    };
    config.validate()?;
    config.check_bounds(req.start)?;
    config.check_bounds(req.end)?;

    let seed = req.seed.unwrap_or_else(entropy_seed);
    let walls = InputGen::from_seed(seed).walls(config, req.start, req.end, req.density);
    Ok(Json(GenerateWallsResponse { walls, seed }))
}
