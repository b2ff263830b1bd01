//! beacon server
//!
//! Minimal instrumented HTTP/WS server:
//! - Fixed routes: /, /post, /health, /about, /metrics
//! - WebSocket echo/chat: /ws?name=...
//! - Every completed request feeds the metrics registry; /metrics serves the
//!   Prometheus text rendering

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use beacon_server::{app_state, config, router};

const CONFIG_PATH: &str = "beacon.yaml";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = match config::load_from_file(CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "config not loaded, using defaults");
            config::ServerConfig::default()
        }
    };

    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "beacon-server starting");
    tracing::info!("endpoints: GET / | POST /post | GET /health | GET /about | GET /metrics | GET /ws");

    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
