use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, SubscriptionStateDto},
        error::ApplicationResult,
    },
    domain::{
        publisher::PublisherRepository, subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

/// Reader-side management of publisher subscriptions and journalist follows.
pub struct SubscriptionCommandService {
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl SubscriptionCommandService {
    pub fn new(
        subscription_repo: Arc<dyn SubscriptionRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            subscription_repo,
            publisher_repo,
            user_repo,
        }
    }

    pub(super) async fn current_state(
        &self,
        reader: &AuthenticatedUser,
    ) -> ApplicationResult<SubscriptionStateDto> {
        let state = self.subscription_repo.for_reader(reader.id).await?;
        Ok(state.into())
    }
}
