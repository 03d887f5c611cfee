use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Flips `is_approved` from false to true in a single conditional write.
    /// Returns the updated article only when this call performed the transition.
    async fn mark_approved(&self, id: ArticleId) -> DomainResult<Option<Article>>;
}

/// Every listing is ordered newest first (`created_at` desc, then id desc).
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Approved articles whose publisher the reader subscribes to or whose
    /// journalist the reader follows.
    async fn list_for_reader(&self, reader_id: UserId) -> DomainResult<Vec<Article>>;

    async fn list_by_journalist(&self, journalist_id: UserId) -> DomainResult<Vec<Article>>;

    async fn list_pending(&self) -> DomainResult<Vec<Article>>;

    async fn list_approved(&self) -> DomainResult<Vec<Article>>;
}
