use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, CanViewArticleSpec},
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Pending articles the viewer may not see are reported as missing.
    pub async fn get_article_by_id(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let viewer = viewer.map(|user| (user.id, user.role));
        if !CanViewArticleSpec::new(&article, viewer).is_satisfied() {
            return Err(ApplicationError::not_found("article not found"));
        }
        Ok(article.into())
    }
}
