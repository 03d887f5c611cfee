use std::sync::Arc;

use crate::domain::{
    article::ArticleReadRepository, publisher::PublisherRepository,
    subscription::SubscriptionRepository, user::UserRepository,
};

/// Role-specific landing views.
pub struct DashboardQueryService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
}

impl DashboardQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            article_repo,
            publisher_repo,
            user_repo,
            subscription_repo,
        }
    }
}
