//! Helpers shared by the integration test binaries.

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request};
use serde_json::Value;

pub const TOKEN: &str = "secreto-de-prueba";

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header("TOKEN", token);
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

pub async fn body_json(response: axum::response::Response) -> Result<Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
