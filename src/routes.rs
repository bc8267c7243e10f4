//! Router construction and shared application state.
//!
//! Kept in the library so integration tests can drive the full middleware
//! and handler chain in-process.

use axum::extract::FromRef;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{middleware, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::domain::{Appointment, Dentist, Patient, Resource};
use crate::error::ApiError;
use crate::handlers::{self, crud};
use crate::middleware::{auth, logger};
use crate::repository::Repository;
use crate::service::Service;
use crate::store::SqlStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SqlStore,
    pub auth_token: String,
}

impl AppState {
    pub fn new(store: SqlStore, auth_token: String) -> Self {
        Self { store, auth_token }
    }
}

impl<R: Resource> FromRef<AppState> for Service<R> {
    fn from_ref(state: &AppState) -> Self {
        Service::new(Repository::new(state.store.clone()))
    }
}

/// Five routes per resource; everything except read-by-id sits behind the
/// token gate.
fn resource_routes<R: Resource>(prefix: &str, state: AppState) -> Router<AppState> {
    let collection = format!("/api/v1/{prefix}");
    let item = format!("/api/v1/{prefix}/:id");

    let protected = Router::new()
        .route(&collection, post(crud::create::<R>))
        .route(
            &item,
            put(crud::update::<R>)
                .patch(crud::patch::<R>)
                .delete(crud::delete::<R>),
        )
        .route_layer(middleware::from_fn_with_state(state, auth::require_token));

    Router::new()
        .route(&item, get(crud::get_by_id::<R>))
        .merge(protected)
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/ping", get(handlers::ping))
        .merge(resource_routes::<Dentist>("odontologos", state.clone()))
        .merge(resource_routes::<Patient>("pacientes", state.clone()))
        .merge(resource_routes::<Appointment>("turnos", state.clone()))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(logger::log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Recovery net: a panicking handler becomes a 500 failure envelope instead
/// of tearing down the connection.
fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    tracing::error!("handler panicked");
    ApiError::internal("unexpected server error").into_response()
}
