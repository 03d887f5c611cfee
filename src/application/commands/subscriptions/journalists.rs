use super::SubscriptionCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, SubscriptionStateDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

impl SubscriptionCommandService {
    pub async fn follow(
        &self,
        reader: &AuthenticatedUser,
        journalist_id: i64,
    ) -> ApplicationResult<SubscriptionStateDto> {
        let journalist = self.resolve_journalist(reader, journalist_id).await?;
        self.subscription_repo
            .add_journalist(reader.id, journalist)
            .await?;
        self.current_state(reader).await
    }

    pub async fn unfollow(
        &self,
        reader: &AuthenticatedUser,
        journalist_id: i64,
    ) -> ApplicationResult<SubscriptionStateDto> {
        let journalist = self.resolve_journalist(reader, journalist_id).await?;
        self.subscription_repo
            .remove_journalist(reader.id, journalist)
            .await?;
        self.current_state(reader).await
    }

    /// Ids that exist but belong to a reader or editor resolve as not found.
    async fn resolve_journalist(
        &self,
        reader: &AuthenticatedUser,
        journalist_id: i64,
    ) -> ApplicationResult<UserId> {
        reader.ensure_capability("subscriptions", "manage")?;
        let id = UserId::new(journalist_id)
            .map_err(|_| ApplicationError::not_found("journalist not found"))?;
        let journalist = self
            .user_repo
            .find_journalist(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("journalist not found"))?;
        Ok(journalist.id)
    }
}
