use super::DashboardQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser, JournalistDto, PublisherDto, ReaderDashboardDto},
        error::ApplicationResult,
    },
    domain::user::Role,
};

impl DashboardQueryService {
    /// Approved articles from subscribed publishers and followed journalists,
    /// plus the catalogues a reader picks subscriptions from.
    pub async fn reader_dashboard(
        &self,
        reader: &AuthenticatedUser,
    ) -> ApplicationResult<ReaderDashboardDto> {
        reader.ensure_capability("feed", "read")?;

        let articles = self.article_repo.list_for_reader(reader.id).await?;
        let publishers = self.publisher_repo.list().await?;
        let journalists = self.user_repo.list_by_role(Role::Journalist).await?;
        let subscriptions = self.subscription_repo.for_reader(reader.id).await?;

        Ok(ReaderDashboardDto {
            articles: articles.into_iter().map(ArticleDto::from).collect(),
            publishers: publishers.into_iter().map(PublisherDto::from).collect(),
            journalists: journalists.into_iter().map(JournalistDto::from).collect(),
            subscriptions: subscriptions.into(),
        })
    }
}
