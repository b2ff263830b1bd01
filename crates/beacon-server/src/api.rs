//! Application routes: index and the sample JSON echo API.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

const INDEX_BODY: &str = "beacon endpoints:\n\
  GET  /         - this listing\n\
  POST /post     - sample JSON echo\n\
  GET  /health   - liveness\n\
  GET  /about    - service description\n\
  GET  /metrics  - Prometheus text format\n\
  GET  /ws       - WebSocket echo/chat\n";

pub async fn index() -> &'static str {
    INDEX_BODY
}

#[derive(Debug, Deserialize)]
pub struct SampleRequest {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SampleResponse {
    pub id: u32,
    pub status: String,
    pub echo: String,
}

fn build_sample_response(req: &SampleRequest) -> SampleResponse {
    SampleResponse {
        id: 123,
        status: "success".to_string(),
        echo: format!("Hello {}: {}", req.name, req.message),
    }
}

/// Malformed bodies answer 400 regardless of the rejection flavor; the
/// instrumentation middleware still sees and records that status.
pub async fn sample_post(payload: Result<Json<SampleRequest>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(req)) => Json(build_sample_response(&req)).into_response(),
        Err(_) => (StatusCode::BAD_REQUEST, "Invalid JSON").into_response(),
    }
}
