//! Sort-trace request/response types.

use serde::{Deserialize, Serialize};

use stepviz_core::SortStep;

/// Request for a sorting trace.
#[derive(Debug, Clone, Deserialize)]
pub struct SortTraceRequest {
    /// Algorithm id; unknown ids fall back to bubble sort.
    pub algorithm: String,
    /// Input values. Copied by the tracer; any length is accepted.
    pub values: Vec<u64>,
}

/// Response carrying a complete sorting trace.
#[derive(Debug, Clone, Serialize)]
pub struct SortTraceResponse {
    /// The resolved algorithm id (after fallback).
    pub algorithm: String,
    pub step_count: usize,
    pub steps: Vec<SortStep>,
}
