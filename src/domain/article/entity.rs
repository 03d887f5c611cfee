// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub publisher_id: PublisherId,
    pub journalist_id: Option<UserId>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Result of asking an article to become approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalOutcome {
    Approved,
    AlreadyApproved,
}

impl Article {
    /// Approval is one-way; there is no operation that clears the flag.
    pub fn approve(&mut self) -> ApprovalOutcome {
        if self.is_approved {
            ApprovalOutcome::AlreadyApproved
        } else {
            self.is_approved = true;
            ApprovalOutcome::Approved
        }
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.journalist_id == Some(user_id)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub publisher_id: PublisherId,
    pub journalist_id: Option<UserId>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

impl NewArticle {
    /// Journalist submissions always start out unapproved.
    pub fn submission(
        title: ArticleTitle,
        content: ArticleContent,
        publisher_id: PublisherId,
        journalist_id: UserId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            content,
            publisher_id,
            journalist_id: Some(journalist_id),
            is_approved: false,
            created_at,
        }
    }
}
