//! Algorithm listing response types.

use serde::Serialize;

/// Both selector families with their ids, for frontend dropdowns.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmsResponse {
    pub sorting: Vec<AlgorithmInfo>,
    pub pathfinding: Vec<AlgorithmInfo>,
}

/// One selectable algorithm.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmInfo {
    pub id: String,
    /// Whether unknown ids fall back to this algorithm.
    pub default: bool,
}
