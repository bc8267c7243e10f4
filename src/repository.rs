//! Generic repository: adapts the storage adapter to the service contract.
//!
//! Storage error detail is discarded here; clients only ever see the fixed
//! per-resource messages below. The real driver error is logged. Delete is
//! the exception: it forwards the storage error unchanged.

use std::marker::PhantomData;

use crate::domain::Resource;
use crate::store::SqlStore;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("could not create this {0}")]
    CreateFailed(&'static str),

    #[error("this {0} does not exist")]
    NotFound(&'static str),

    #[error("could not update this {0}")]
    UpdateFailed(&'static str),

    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

pub struct Repository<R: Resource> {
    store: SqlStore,
    _resource: PhantomData<R>,
}

impl<R: Resource> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> Repository<R> {
    pub fn new(store: SqlStore) -> Self {
        Self {
            store,
            _resource: PhantomData,
        }
    }

    pub async fn create(&self, entity: R::Entity) -> Result<R::Entity, RepositoryError> {
        R::insert(&self.store, entity).await.map_err(|e| {
            tracing::error!(resource = R::NAME, "create failed: {}", e);
            RepositoryError::CreateFailed(R::NAME)
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<R::Entity, RepositoryError> {
        R::fetch(&self.store, id).await.map_err(|e| {
            if !matches!(e, sqlx::Error::RowNotFound) {
                tracing::error!(resource = R::NAME, id, "read failed: {}", e);
            }
            RepositoryError::NotFound(R::NAME)
        })
    }

    pub async fn update(&self, id: i64, entity: R::Entity) -> Result<R::Entity, RepositoryError> {
        R::persist(&self.store, id, entity).await.map_err(|e| {
            tracing::error!(resource = R::NAME, id, "update failed: {}", e);
            RepositoryError::UpdateFailed(R::NAME)
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        R::remove(&self.store, id).await?;
        Ok(())
    }
}
