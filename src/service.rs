//! Business layer between handlers and repositories.
//!
//! Today every operation delegates straight through; the layer exists as the
//! seam where future rules land (e.g. scheduling-conflict checks for
//! appointments) without touching handlers or repositories.

use crate::domain::Resource;
use crate::repository::{Repository, RepositoryError};

pub struct Service<R: Resource> {
    repository: Repository<R>,
}

impl<R: Resource> Clone for Service<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<R: Resource> Service<R> {
    pub fn new(repository: Repository<R>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, entity: R::Entity) -> Result<R::Entity, RepositoryError> {
        self.repository.create(entity).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<R::Entity, RepositoryError> {
        self.repository.get_by_id(id).await
    }

    pub async fn update(&self, id: i64, entity: R::Entity) -> Result<R::Entity, RepositoryError> {
        self.repository.update(id, entity).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.repository.delete(id).await
    }
}
