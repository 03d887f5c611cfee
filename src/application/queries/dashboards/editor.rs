use super::DashboardQueryService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser, EditorDashboardDto},
    error::ApplicationResult,
};

impl DashboardQueryService {
    pub async fn editor_dashboard(
        &self,
        editor: &AuthenticatedUser,
    ) -> ApplicationResult<EditorDashboardDto> {
        editor.ensure_capability("articles", "view:pending")?;
        let articles = self.article_repo.list_pending().await?;
        Ok(EditorDashboardDto {
            articles: articles.into_iter().map(ArticleDto::from).collect(),
        })
    }
}
