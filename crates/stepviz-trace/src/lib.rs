//! Step-trace engine for sorting and grid-pathfinding visualization.
//!
//! Two independent trace generators, each a pure function of its inputs:
//!
//! - [`SortStepTracer`] runs one of five sorting strategies over a copied
//!   value sequence and records a [`stepviz_core::SortStep`] at every
//!   comparison, swap, shift, and finalization point.
//! - [`PathStepTracer`] runs breadth-first, depth-first, or uniform-cost
//!   search over a fresh fixed-size grid and records a
//!   [`stepviz_core::PathStep`] per expansion, plus a trailing snapshot
//!   carrying the reconstructed path when the goal is reached.
//!
//! Traces are fully materialized before they are returned and every snapshot
//! owns its own copy of the working data, so a caller can replay frames in
//! any order, any number of times. Identical inputs always produce identical
//! traces; there is no hidden state between calls.
//!
//! [`InputGen`] is the seeded input generator the surfaces use to produce
//! demo arrays and wall sets; it never participates in tracing itself.

pub mod gen;
pub mod path;
pub mod sort;

pub use gen::InputGen;
pub use path::PathStepTracer;
pub use sort::SortStepTracer;
