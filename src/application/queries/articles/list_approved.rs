use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    pub async fn list_approved(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_approved().await?;
        Ok(articles.into_iter().map(ArticleDto::from).collect())
    }
}
