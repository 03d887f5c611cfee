use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const ARTICLE_COLUMNS: &str =
    "id, title, content, publisher_id, journalist_id, is_approved, created_at";
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_many(&self, sql: &str, bind: Option<i64>) -> DomainResult<Vec<Article>> {
        let mut query = sqlx::query_as::<_, ArticleRow>(sql);
        if let Some(value) = bind {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx)?;
        rows.into_iter().map(Article::try_from).collect()
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    publisher_id: i64,
    journalist_id: Option<i64>,
    is_approved: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            publisher_id: PublisherId::new(row.publisher_id)?,
            journalist_id: row.journalist_id.map(UserId::new).transpose()?,
            is_approved: row.is_approved,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            publisher_id,
            journalist_id,
            is_approved,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, content, publisher_id, journalist_id, is_approved, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(i64::from(publisher_id))
        .bind(journalist_id.map(i64::from))
        .bind(is_approved)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn mark_approved(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET is_approved = 1
             WHERE id = ? AND is_approved = 0
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_for_reader(&self, reader_id: UserId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles
             WHERE is_approved = 1
               AND (publisher_id IN (SELECT publisher_id FROM reader_publisher_subscriptions WHERE reader_id = ?1)
                    OR journalist_id IN (SELECT journalist_id FROM reader_journalist_follows WHERE reader_id = ?1))
             {NEWEST_FIRST}"
        ))
        .bind(i64::from(reader_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_by_journalist(&self, journalist_id: UserId) -> DomainResult<Vec<Article>> {
        self.fetch_many(
            &format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE journalist_id = ? {NEWEST_FIRST}"),
            Some(i64::from(journalist_id)),
        )
        .await
    }

    async fn list_pending(&self) -> DomainResult<Vec<Article>> {
        self.fetch_many(
            &format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE is_approved = 0 {NEWEST_FIRST}"),
            None,
        )
        .await
    }

    async fn list_approved(&self) -> DomainResult<Vec<Article>> {
        self.fetch_many(
            &format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE is_approved = 1 {NEWEST_FIRST}"),
            None,
        )
        .await
    }
}
