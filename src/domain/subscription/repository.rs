use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::subscription::entity::{ReaderSubscriptions, Subscriber};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Edge store for reader→publisher and reader→journalist relations.
///
/// Adds and removes have set semantics: repeating an add or removing an absent
/// edge succeeds without changing anything.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn add_publisher(&self, reader: UserId, publisher: PublisherId) -> DomainResult<()>;

    async fn remove_publisher(&self, reader: UserId, publisher: PublisherId) -> DomainResult<()>;

    async fn add_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()>;

    async fn remove_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()>;

    async fn for_reader(&self, reader: UserId) -> DomainResult<ReaderSubscriptions>;

    async fn publisher_subscribers(&self, publisher: PublisherId) -> DomainResult<Vec<Subscriber>>;

    async fn journalist_followers(&self, journalist: UserId) -> DomainResult<Vec<Subscriber>>;
}
