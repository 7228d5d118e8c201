//! Sort-trace handler.

use axum::Json;

use stepviz_core::SortAlgorithm;
use stepviz_trace::SortStepTracer;

use crate::schema::sort::{SortTraceRequest, SortTraceResponse};

/// Computes a full sorting trace for the requested values.
///
/// `POST /trace/sort`
pub async fn trace_sort(Json(req): Json<SortTraceRequest>) -> Json<SortTraceResponse> {
    let algorithm = SortAlgorithm::from_id(&req.algorithm);
    let steps = SortStepTracer::run(algorithm, &req.values);

    Json(SortTraceResponse {
        algorithm: algorithm.id().to_string(),
        step_count: steps.len(),
        steps,
    })
}
