use crate::domain::errors::DomainResult;
use crate::domain::publisher::entity::{NewPublisher, Publisher};
use crate::domain::publisher::value_objects::PublisherId;
use async_trait::async_trait;

#[async_trait]
pub trait PublisherRepository: Send + Sync {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher>;

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>>;

    async fn list(&self) -> DomainResult<Vec<Publisher>>;

    /// Removes the publisher together with its articles and subscription edges.
    /// Returns `false` when no such publisher existed.
    async fn delete(&self, id: PublisherId) -> DomainResult<bool>;
}
