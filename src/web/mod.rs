//! Uniform JSON response envelope shared by every handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Success envelope: `{"code": <int>, "data": <entity|null>, "message": <string>}`.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    code: StatusCode,
    data: T,
    message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with a payload.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::OK,
            data,
            message: message.into(),
        }
    }

    /// 201 Created with the stored entity.
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::CREATED,
            data,
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub fn body(&self) -> serde_json::Value {
        json!({
            "code": self.code.as_u16(),
            "data": serde_json::to_value(&self.data).unwrap(),
            "message": self.message,
        })
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let data = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("failed to serialize response data: {}", e);
                return crate::error::ApiError::internal("failed to format response").into_response();
            }
        };

        let envelope = json!({
            "code": self.code.as_u16(),
            "data": data,
            "message": self.message,
        });

        (self.code, Json(envelope)).into_response()
    }
}
