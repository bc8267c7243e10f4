use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::ValidationError;
use crate::store::SqlStore;

/// Capability set of one CRUD resource.
///
/// One generic handler/service/repository chain is instantiated per
/// implementor; everything resource-specific lives here: the entity and
/// patch types, required-field validation, patch merging, and the mapping
/// onto the store's per-entity method set.
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Full entity as stored and as exchanged over the wire.
    type Entity: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static;

    /// Partial-update payload; every field is optional.
    type Patch: DeserializeOwned + Send + 'static;

    /// Singular resource name used in client-facing messages.
    const NAME: &'static str;

    /// Reject create/full-update payloads with empty required fields.
    fn validate(entity: &Self::Entity) -> Result<(), ValidationError>;

    /// Overlay a patch on the current entity. Fields absent from the patch
    /// keep their stored values; fields present overwrite, even with an
    /// empty string.
    fn merge(current: Self::Entity, patch: Self::Patch) -> Self::Entity;

    async fn insert(store: &SqlStore, entity: Self::Entity) -> Result<Self::Entity, sqlx::Error>;

    async fn fetch(store: &SqlStore, id: i64) -> Result<Self::Entity, sqlx::Error>;

    async fn persist(
        store: &SqlStore,
        id: i64,
        entity: Self::Entity,
    ) -> Result<Self::Entity, sqlx::Error>;

    async fn remove(store: &SqlStore, id: i64) -> Result<(), sqlx::Error>;
}
