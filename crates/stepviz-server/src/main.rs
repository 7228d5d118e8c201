//! Binary entrypoint for the stepviz HTTP server.
//!
//! Reads configuration from environment variables:
//! - `STEPVIZ_PORT`: server listen port (default: "3000")
//! - `STEPVIZ_ROWS`: default grid rows (default: "20")
//! - `STEPVIZ_COLS`: default grid columns (default: "30")

use stepviz_core::GridConfig;
use stepviz_server::router::build_router;
use stepviz_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("STEPVIZ_PORT").unwrap_or_else(|_| "3000".to_string());
    let rows = env_usize("STEPVIZ_ROWS", 20);
    let cols = env_usize("STEPVIZ_COLS", 30);

    let state = AppState::new(GridConfig { rows, cols })
        .expect("Failed to initialize application state");

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("stepviz server starting on {} with {}x{} grid", addr, rows, cols);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
