// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            articles::ArticleCommandService, publishers::PublisherCommandService,
            subscriptions::SubscriptionCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        notifications::NotificationDispatcher,
        ports::{
            ClockPort, MailerPort, PasswordHasherPort, TokenManagerPort,
            session_revocation::SessionRevocationStore,
        },
        queries::{
            articles::ArticleQueryService, dashboards::DashboardQueryService,
            publishers::PublisherQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        publisher::PublisherRepository,
        subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub publisher_commands: Arc<PublisherCommandService>,
    pub subscription_commands: Arc<SubscriptionCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub dashboard_queries: Arc<DashboardQueryService>,
    pub publisher_queries: Arc<PublisherQueryService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<TokenManagerPort>,
    session_revocation_store: Arc<dyn SessionRevocationStore>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        token_manager: Arc<TokenManagerPort>,
        session_revocation_store: Arc<dyn SessionRevocationStore>,
        mailer: Arc<MailerPort>,
        clock: Arc<ClockPort>,
        mail_sender: impl Into<String>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&session_revocation_store),
            Arc::clone(&clock),
        ));

        let dispatcher = Arc::new(NotificationDispatcher::new(
            Arc::clone(&subscription_repo),
            mailer,
            mail_sender,
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&publisher_repo),
            dispatcher,
            Arc::clone(&clock),
        ));

        let publisher_commands = Arc::new(PublisherCommandService::new(Arc::clone(&publisher_repo)));
        let subscription_commands = Arc::new(SubscriptionCommandService::new(
            Arc::clone(&subscription_repo),
            Arc::clone(&publisher_repo),
            Arc::clone(&user_repo),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let dashboard_queries = Arc::new(DashboardQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&publisher_repo),
            Arc::clone(&user_repo),
            Arc::clone(&subscription_repo),
        ));
        let publisher_queries = Arc::new(PublisherQueryService::new(Arc::clone(&publisher_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            user_commands,
            article_commands,
            publisher_commands,
            subscription_commands,
            article_queries,
            dashboard_queries,
            publisher_queries,
            user_queries,
            token_manager,
            session_revocation_store,
        }
    }

    /// Verifies a raw bearer token and rejects sessions that were logged out.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;
        self.ensure_session_not_revoked(&user).await?;
        Ok(user)
    }

    async fn ensure_session_not_revoked(&self, user: &AuthenticatedUser) -> ApplicationResult<()> {
        if let Some(session_id) = &user.session_id
            && self.session_revocation_store.is_revoked(session_id).await?
        {
            return Err(ApplicationError::unauthorized("session revoked"));
        }

        Ok(())
    }
}
