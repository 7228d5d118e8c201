//! Path-trace request/response types.

use serde::{Deserialize, Serialize};

use stepviz_core::{PathStep, Pos};

/// Request for a pathfinding trace.
#[derive(Debug, Clone, Deserialize)]
pub struct PathTraceRequest {
    /// Algorithm id; unknown ids fall back to bfs.
    pub algorithm: String,
    pub start: Pos,
    pub end: Pos,
    /// Wall positions; out-of-bounds entries are ignored.
    #[serde(default)]
    pub walls: Vec<Pos>,
    /// Grid rows; the server default applies when omitted.
    #[serde(default)]
    pub rows: Option<usize>,
    /// Grid columns; the server default applies when omitted.
    #[serde(default)]
    pub cols: Option<usize>,
}

/// Response carrying a complete pathfinding trace.
#[derive(Debug, Clone, Serialize)]
pub struct PathTraceResponse {
    /// The resolved algorithm id (after fallback).
    pub algorithm: String,
    pub step_count: usize,
    /// Whether the final snapshot carries a non-empty path. An unreachable
    /// goal is a normal completed trace, not an error.
    pub path_found: bool,
    pub steps: Vec<PathStep>,
}
