pub mod crud;

/// GET /api/v1/ping - liveness probe.
pub async fn ping() -> &'static str {
    "pong"
}
