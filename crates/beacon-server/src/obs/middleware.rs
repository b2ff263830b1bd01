//! Per-request timing middleware.

use axum::{extract::Request, extract::State, middleware::Next, response::Response};
use tokio::time::Instant;

use crate::app_state::AppState;

/// Time one request from receipt to response-completion and record it.
///
/// Called once per request; the status is read after the inner handler has
/// finalized it, so error responses (400/405/500) are recorded too. The path
/// is taken without the query string and without normalization.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let res = next.run(req).await;

    state
        .metrics()
        .record(&method, &path, res.status().as_u16(), start.elapsed());
    res
}
