// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleContent, ArticleTitle, NewArticle},
        publisher::PublisherId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub publisher_id: i64,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        actor.ensure_capability("articles", "create")?;

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let publisher_id = PublisherId::new(command.publisher_id)
            .map_err(|_| ApplicationError::not_found("publisher not found"))?;

        self.publisher_repo
            .find_by_id(publisher_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;

        let new_article =
            NewArticle::submission(title, content, publisher_id, actor.id, self.clock.now());

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(
            article_id = %created.id,
            journalist_id = %actor.id,
            "article submitted for approval"
        );
        Ok(created.into())
    }
}
