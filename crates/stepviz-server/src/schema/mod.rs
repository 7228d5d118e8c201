//! Request/response types for the stepviz HTTP API.

pub mod algorithms;
pub mod generate;
pub mod path;
pub mod sort;
