//! Request logging middleware.

use axum::extract::Request;
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use http_body::Body as HttpBody;
use std::time::Instant;

/// Logs verb, path, response byte size and latency for every request once
/// the response has been produced. Side effect only; the response passes
/// through untouched.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        response_bytes = response_size(&response),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );

    response
}

/// Response size without buffering the body: fixed bodies report an exact
/// size hint, streaming bodies fall back to their Content-Length header,
/// anything else logs 0.
fn response_size(response: &Response) -> u64 {
    response
        .body()
        .size_hint()
        .exact()
        .or_else(|| content_length(response.headers()))
        .unwrap_or(0)
}

fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}
