//! Operational HTTP endpoints.
//!
//! - `/health`  : liveness
//! - `/about`   : short service description
//! - `/metrics` : Prometheus text format

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn about() -> impl IntoResponse {
    (
        StatusCode::OK,
        "beacon: a minimal instrumented HTTP/WS server exposing Prometheus metrics",
    )
}

pub async fn metrics(axum::extract::State(state): axum::extract::State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, beacon_core::metrics::CONTENT_TYPE)],
        body,
    )
        .into_response()
}
