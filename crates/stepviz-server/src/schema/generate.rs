//! Demo input generation request/response types.
//!
//! The seed is echoed back so a frontend can regenerate or share the exact
//! same scenario later.

use serde::{Deserialize, Serialize};

use stepviz_core::Pos;

/// Request for a generated sort input.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateValuesRequest {
    #[serde(default = "default_size")]
    pub size: usize,
    /// Reused when present; freshly drawn and echoed back when absent.
    pub seed: Option<u64>,
}

fn default_size() -> usize {
    30
}

/// Response carrying a generated sort input.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateValuesResponse {
    pub values: Vec<u64>,
    pub seed: u64,
}

/// Request for a generated wall layout.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateWallsRequest {
    pub start: Pos,
    pub end: Pos,
    /// Wall probability per cell.
    #[serde(default = "default_density")]
    pub density: f64,
    pub seed: Option<u64>,
    #[serde(default)]
    pub rows: Option<usize>,
    #[serde(default)]
    pub cols: Option<usize>,
}

fn default_density() -> f64 {
    stepviz_trace::gen::DEFAULT_WALL_DENSITY
}

/// Response carrying a generated wall layout.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateWallsResponse {
    pub walls: Vec<Pos>,
    pub seed: u64,
}
