//! Router-level instrumentation tests: every completed request, including
//! error responses, must show up in the /metrics body with its final status.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use beacon_server::{app_state::AppState, config::ServerConfig, router};

fn app() -> Router {
    router::build_router(AppState::new(ServerConfig::default()))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let body = res.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn error_responses_are_recorded_with_final_status() {
    let app = app();

    // malformed body: the handler answers 400 and the middleware must record
    // that status, not the one the route would answer on success
    let (status, _, _) = send(&app, post_json("/post", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) =
        send(&app, post_json("/post", r#"{"name":"ana","message":"hi"}"#)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, headers, body) = send(&app, get("/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        beacon_core::metrics::CONTENT_TYPE
    );

    assert!(body.contains("http_requests_total{method=\"POST\",endpoint=\"/post\",status_code=\"400\"} 1"));
    assert!(body.contains("http_requests_total{method=\"POST\",endpoint=\"/post\",status_code=\"200\"} 1"));
    // one duration observation per request, statuses pooled per route
    assert!(body.contains("http_request_duration_seconds_count{method=\"POST\",endpoint=\"/post\"} 2"));
}

#[tokio::test]
async fn wrong_method_is_recorded_as_405() {
    let app = app();

    let (status, _, _) = send(&app, get("/post")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (_, _, body) = send(&app, get("/metrics")).await;
    assert!(body.contains("http_requests_total{method=\"GET\",endpoint=\"/post\",status_code=\"405\"} 1"));
}

#[tokio::test]
async fn path_is_recorded_without_query_string() {
    let app = app();

    let (status, _, _) = send(&app, get("/health?verbose=1")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, _, body) = send(&app, get("/metrics")).await;
    assert!(body.contains("http_requests_total{method=\"GET\",endpoint=\"/health\",status_code=\"200\"} 1"));
    assert!(!body.contains("verbose"));
}

#[tokio::test]
async fn scrape_route_records_itself_exactly_once() {
    let app = app();

    let (status, _, first) = send(&app, get("/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    // the first scrape is recorded after its body has been rendered
    assert!(!first.contains("endpoint=\"/metrics\""));

    let (_, _, second) = send(&app, get("/metrics")).await;
    assert!(second.contains("http_requests_total{method=\"GET\",endpoint=\"/metrics\",status_code=\"200\"} 1"));
}
