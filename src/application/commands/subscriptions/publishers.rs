use super::SubscriptionCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, SubscriptionStateDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::publisher::PublisherId,
};

impl SubscriptionCommandService {
    pub async fn subscribe(
        &self,
        reader: &AuthenticatedUser,
        publisher_id: i64,
    ) -> ApplicationResult<SubscriptionStateDto> {
        let publisher = self.resolve_publisher(reader, publisher_id).await?;
        self.subscription_repo
            .add_publisher(reader.id, publisher)
            .await?;
        self.current_state(reader).await
    }

    pub async fn unsubscribe(
        &self,
        reader: &AuthenticatedUser,
        publisher_id: i64,
    ) -> ApplicationResult<SubscriptionStateDto> {
        let publisher = self.resolve_publisher(reader, publisher_id).await?;
        self.subscription_repo
            .remove_publisher(reader.id, publisher)
            .await?;
        self.current_state(reader).await
    }

    async fn resolve_publisher(
        &self,
        reader: &AuthenticatedUser,
        publisher_id: i64,
    ) -> ApplicationResult<PublisherId> {
        reader.ensure_capability("subscriptions", "manage")?;
        let id = PublisherId::new(publisher_id)
            .map_err(|_| ApplicationError::not_found("publisher not found"))?;
        let publisher = self
            .publisher_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
        Ok(publisher.id)
    }
}
