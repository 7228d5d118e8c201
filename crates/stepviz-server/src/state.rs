//! Application state.
//!
//! The tracers are pure functions, so the only shared state is the default
//! grid geometry requests may override per call. `AppState` is `Clone` and
//! copied into each handler by axum.

use stepviz_core::GridConfig;

use crate::error::ApiError;

/// Shared application state for the HTTP server.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Default grid dimensions for path traces and wall generation.
    pub grid: GridConfig,
}

impl AppState {
    /// Creates a new `AppState`, rejecting degenerate grid dimensions.
    pub fn new(grid: GridConfig) -> Result<Self, ApiError> {
        grid.validate()?;
        Ok(AppState { grid })
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            grid: GridConfig::default(),
        }
    }
}
