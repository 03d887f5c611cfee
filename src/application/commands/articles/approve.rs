// src/application/commands/articles/approve.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ApprovalResultDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
        notifications::DispatchReport,
    },
    domain::article::{ApprovalOutcome, ArticleId},
};

pub struct ApproveArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Approves an article and notifies its audience.
    ///
    /// Notifications go out only for the request that actually flips the flag;
    /// approving an approved article is a successful no-op.
    pub async fn approve_article(
        &self,
        actor: &AuthenticatedUser,
        command: ApproveArticleCommand,
    ) -> ApplicationResult<ApprovalResultDto> {
        actor.ensure_capability("articles", "approve")?;
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;

        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if article.approve() == ApprovalOutcome::AlreadyApproved {
            return Ok(unchanged(article.into()));
        }

        // A concurrent approval may have won between the read and this write.
        let Some(approved) = self.write_repo.mark_approved(id).await? else {
            article.is_approved = true;
            return Ok(unchanged(article.into()));
        };

        tracing::info!(article_id = %approved.id, editor_id = %actor.id, "article approved");

        let report = match self.dispatcher.dispatch(&approved).await {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(
                    article_id = %approved.id,
                    error = %err,
                    "could not resolve notification audience"
                );
                DispatchReport::default()
            }
        };

        Ok(ApprovalResultDto {
            article: approved.into(),
            transitioned: true,
            notified: report.delivered,
            failed_notifications: report.failed,
        })
    }
}

fn unchanged(article: crate::application::dto::ArticleDto) -> ApprovalResultDto {
    ApprovalResultDto {
        article,
        transitioned: false,
        notified: 0,
        failed_notifications: 0,
    }
}
