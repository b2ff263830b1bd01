//! Prometheus text exposition (format version 0.0.4).
//!
//! Two metric families are emitted: `http_requests_total` (counter, labeled
//! by method/endpoint/status_code) and `http_request_duration_seconds`
//! (histogram exposed as count + sum only, no buckets). Counts render as
//! integers; sums render as plain decimal seconds.

use std::fmt::Write;

use super::registry::Snapshot;

/// Content type the `/metrics` route must serve the rendered body with.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

const REQUESTS_NAME: &str = "http_requests_total";
const REQUESTS_HELP: &str = "Total number of HTTP requests";
const DURATION_NAME: &str = "http_request_duration_seconds";
const DURATION_HELP: &str = "Duration of HTTP requests in seconds";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn seconds(nanos: u64) -> f64 {
    nanos as f64 / 1e9
}

pub(crate) fn render(snap: &Snapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# HELP {} {}", REQUESTS_NAME, REQUESTS_HELP);
    let _ = writeln!(out, "# TYPE {} counter", REQUESTS_NAME);
    for (key, count) in &snap.requests {
        let _ = writeln!(
            out,
            "{}{{method=\"{}\",endpoint=\"{}\",status_code=\"{}\"}} {}",
            REQUESTS_NAME,
            escape_label(&key.method),
            escape_label(&key.endpoint),
            key.status,
            count
        );
    }

    let _ = writeln!(out, "# HELP {} {}", DURATION_NAME, DURATION_HELP);
    let _ = writeln!(out, "# TYPE {} histogram", DURATION_NAME);
    for (key, count, sum_nanos) in &snap.durations {
        let labels = format!(
            "method=\"{}\",endpoint=\"{}\"",
            escape_label(&key.method),
            escape_label(&key.endpoint)
        );
        let _ = writeln!(out, "{}_count{{{}}} {}", DURATION_NAME, labels, count);
        let _ = writeln!(out, "{}_sum{{{}}} {}", DURATION_NAME, labels, seconds(*sum_nanos));
    }

    out
}
