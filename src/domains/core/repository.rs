use crate::errors::DomainResult;
use async_trait::async_trait;

/// Trait for finding entities by their surrogate key
#[async_trait]
pub trait FindById<T> {
    /// Find an entity by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<T>;
}

/// Trait for entities that support hard deletion
#[async_trait]
pub trait HardDeletable {
    /// The name of the entity table in the database (for logging and errors)
    fn entity_name(&self) -> &'static str;

    /// Hard delete an entity by ID. Dependent rows go with it through
    /// `ON DELETE CASCADE`.
    async fn hard_delete(&self, id: i64) -> DomainResult<()>;
}
