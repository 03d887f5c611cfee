use super::DashboardQueryService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser, JournalistDashboardDto},
    error::ApplicationResult,
};

impl DashboardQueryService {
    /// Everything the journalist has written, approved or not.
    pub async fn journalist_dashboard(
        &self,
        journalist: &AuthenticatedUser,
    ) -> ApplicationResult<JournalistDashboardDto> {
        journalist.ensure_capability("articles", "view:own")?;
        let articles = self.article_repo.list_by_journalist(journalist.id).await?;
        Ok(JournalistDashboardDto {
            articles: articles.into_iter().map(ArticleDto::from).collect(),
        })
    }
}
