use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::Instrument;

pub async fn trace_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let route = req.uri().path().to_string();
    let span = tracing::info_span!("http.request", method = %method, route = %route);
    let started = Instant::now();

    let response = next.run(req).instrument(span.clone()).await;

    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;
    span.in_scope(|| {
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), latency_ms, "request failed");
        } else {
            tracing::info!(status = status.as_u16(), latency_ms, "request finished");
        }
    });
    response
}
