//! HTTP handler functions, one module per route group.

pub mod algorithms;
pub mod generate;
pub mod path;
pub mod sort;
