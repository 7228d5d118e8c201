//! Algorithm listing handler.

use axum::Json;

use stepviz_core::{PathAlgorithm, SortAlgorithm};

use crate::schema::algorithms::{AlgorithmInfo, AlgorithmsResponse};

/// Lists both selector families.
///
/// `GET /algorithms`
pub async fn list_algorithms() -> Json<AlgorithmsResponse> {
    let sorting = SortAlgorithm::ALL
        .iter()
        .map(|a| AlgorithmInfo {
            id: a.id().to_string(),
            default: *a == SortAlgorithm::from_id(""),
        })
        .collect();
    let pathfinding = PathAlgorithm::ALL
        .iter()
        .map(|a| AlgorithmInfo {
            id: a.id().to_string(),
            default: *a == PathAlgorithm::from_id(""),
        })
        .collect();

    Json(AlgorithmsResponse {
        sorting,
        pathfinding,
    })
}
