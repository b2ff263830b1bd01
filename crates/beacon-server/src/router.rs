//! Axum router wiring.
//!
//! Fixed routes plus the WS upgrade; every route is wrapped by the request
//! instrumentation middleware so each completed request records exactly one
//! (method, path, status, duration) tuple.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, obs, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/post", post(api::sample_post))
        .route("/health", get(ops::health))
        .route("/about", get(ops::about))
        .route("/metrics", get(ops::metrics))
        .route("/ws", get(transport::ws::ws_upgrade))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            obs::middleware::track_requests,
        ))
        .with_state(state)
}
