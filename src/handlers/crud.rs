//! HTTP boundary for the three CRUD slices.
//!
//! Each handler is generic over [`Resource`] and instantiated per entity at
//! route registration. Path ids are parsed here so a non-numeric id is
//! rejected with 400 before anything touches the repository; JSON rejections
//! are folded into the same 400 envelope as every other bad request.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use crate::domain::Resource;
use crate::error::ApiError;
use crate::service::Service;
use crate::web::ApiResponse;

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::bad_request("invalid id"))
}

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|_| ApiError::bad_request("invalid JSON body"))
}

/// POST /{resource}
pub async fn create<R: Resource>(
    State(service): State<Service<R>>,
    payload: Result<Json<R::Entity>, JsonRejection>,
) -> Result<ApiResponse<R::Entity>, ApiError> {
    let entity = decode(payload)?;
    R::validate(&entity).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let created = service
        .create(entity)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(ApiResponse::created(
        created,
        format!("the {} has been created", R::NAME),
    ))
}

/// GET /{resource}/{id}
pub async fn get_by_id<R: Resource>(
    State(service): State<Service<R>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<R::Entity>, ApiError> {
    let id = parse_id(&id)?;

    let entity = service
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::not_found(e.to_string()))?;

    Ok(ApiResponse::ok(
        entity,
        format!("the {} was found", R::NAME),
    ))
}

/// PUT /{resource}/{id} - full replace.
pub async fn update<R: Resource>(
    State(service): State<Service<R>>,
    Path(id): Path<String>,
    payload: Result<Json<R::Entity>, JsonRejection>,
) -> Result<ApiResponse<R::Entity>, ApiError> {
    let id = parse_id(&id)?;

    service
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::not_found(e.to_string()))?;

    let entity = decode(payload)?;
    R::validate(&entity).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let updated = service
        .update(id, entity)
        .await
        .map_err(|e| ApiError::conflict(e.to_string()))?;

    Ok(ApiResponse::ok(
        updated,
        format!("the {} has been updated", R::NAME),
    ))
}

/// PATCH /{resource}/{id} - partial update.
///
/// Fields absent from the body keep their stored values; fields present
/// overwrite them. The merged entity must still pass required-field
/// validation.
pub async fn patch<R: Resource>(
    State(service): State<Service<R>>,
    Path(id): Path<String>,
    payload: Result<Json<R::Patch>, JsonRejection>,
) -> Result<ApiResponse<R::Entity>, ApiError> {
    let id = parse_id(&id)?;

    let current = service
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::not_found(e.to_string()))?;

    let patch = decode(payload)?;
    let merged = R::merge(current, patch);
    R::validate(&merged).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let updated = service
        .update(id, merged)
        .await
        .map_err(|e| ApiError::conflict(e.to_string()))?;

    Ok(ApiResponse::ok(
        updated,
        format!("the {} has been updated", R::NAME),
    ))
}

/// DELETE /{resource}/{id}
pub async fn delete<R: Resource>(
    State(service): State<Service<R>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Option<R::Entity>>, ApiError> {
    let id = parse_id(&id)?;

    service
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::not_found(e.to_string()))?;

    service.delete(id).await.map_err(delete_failure::<R>)?;

    Ok(ApiResponse::ok(
        None,
        format!("the {} has been deleted", R::NAME),
    ))
}

/// The repository forwards delete failures with the raw driver error; that
/// detail is logged here and the client gets a fixed message like every
/// other operation.
fn delete_failure<R: Resource>(err: crate::repository::RepositoryError) -> ApiError {
    tracing::error!(resource = R::NAME, "delete failed: {}", err);
    ApiError::not_found(format!("could not delete this {}", R::NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Dentist;
    use crate::repository::RepositoryError;
    use axum::http::StatusCode;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("4.2").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn delete_failure_hides_the_driver_error() {
        let err = delete_failure::<Dentist>(RepositoryError::Storage(sqlx::Error::PoolClosed));

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        let message = err.to_string();
        assert_eq!(message, "could not delete this dentist");
        assert!(!message.contains("pool"));
    }
}
