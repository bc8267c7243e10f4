//! Shared-secret token gate for mutating routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::routes::AppState;

/// Fixed request header carrying the shared secret.
pub const AUTH_HEADER: &str = "TOKEN";

/// Rejects the request with 401 unless the `TOKEN` header matches the
/// configured secret. The secret is injected through application state;
/// nothing here reads the process environment.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTH_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("token not found"))?;

    if token != state.auth_token {
        return Err(ApiError::unauthorized("invalid token"));
    }

    Ok(next.run(request).await)
}
