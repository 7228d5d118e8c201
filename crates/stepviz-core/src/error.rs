//! Core error types for stepviz-core.
//!
//! Uses `thiserror` for structured, matchable error variants. The trace
//! engine itself never fails; these errors belong to the surfaces (CLI,
//! HTTP API) that must validate geometry and input syntax before handing
//! anything to a tracer.

use crate::pos::Pos;
use thiserror::Error;

/// Core errors produced by the stepviz-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A position string did not match the `row,col` syntax.
    #[error("invalid position '{input}', expected 'row,col'")]
    InvalidPosition { input: String },

    /// A start or end position lies outside the configured grid.
    #[error("position {pos} outside {rows}x{cols} grid")]
    PositionOutOfBounds { pos: Pos, rows: usize, cols: usize },

    /// Grid dimensions must both be non-zero.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}
