use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub publisher_id: i64,
    #[serde(default)]
    pub journalist_id: Option<i64>,
    pub is_approved: bool,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            publisher_id: article.publisher_id.into(),
            journalist_id: article.journalist_id.map(Into::into),
            is_approved: article.is_approved,
            created_at: article.created_at,
        }
    }
}

/// Outcome of an approval request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApprovalResultDto {
    pub article: ArticleDto,
    /// False when the article had already been approved before this request.
    pub transitioned: bool,
    pub notified: usize,
    pub failed_notifications: usize,
}
