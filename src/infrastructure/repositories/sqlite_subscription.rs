use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::subscription::{ReaderSubscriptions, Subscriber, SubscriptionRepository};
use crate::domain::user::{EmailAddress, UserId, Username};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

/// Edge tables use composite primary keys, so `INSERT OR IGNORE` gives set
/// semantics for free.
#[derive(Clone)]
pub struct SqliteSubscriptionRepository {
    pool: SqlitePool,
}

impl SqliteSubscriptionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn execute_edge(&self, sql: &str, reader: UserId, target: i64) -> DomainResult<()> {
        sqlx::query(sql)
            .bind(i64::from(reader))
            .bind(target)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn subscribers(&self, sql: &str, target: i64) -> DomainResult<Vec<Subscriber>> {
        let rows = sqlx::query_as::<_, SubscriberRow>(sql)
            .bind(target)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(Subscriber::try_from).collect()
    }
}

#[derive(Debug, FromRow)]
struct SubscriberRow {
    id: i64,
    username: String,
    email: String,
}

impl TryFrom<SubscriberRow> for Subscriber {
    type Error = DomainError;

    fn try_from(row: SubscriberRow) -> Result<Self, Self::Error> {
        Ok(Subscriber {
            user_id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
        })
    }
}

#[async_trait]
impl SubscriptionRepository for SqliteSubscriptionRepository {
    async fn add_publisher(&self, reader: UserId, publisher: PublisherId) -> DomainResult<()> {
        self.execute_edge(
            "INSERT OR IGNORE INTO reader_publisher_subscriptions (reader_id, publisher_id) VALUES (?, ?)",
            reader,
            publisher.into(),
        )
        .await
    }

    async fn remove_publisher(&self, reader: UserId, publisher: PublisherId) -> DomainResult<()> {
        self.execute_edge(
            "DELETE FROM reader_publisher_subscriptions WHERE reader_id = ? AND publisher_id = ?",
            reader,
            publisher.into(),
        )
        .await
    }

    async fn add_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()> {
        self.execute_edge(
            "INSERT OR IGNORE INTO reader_journalist_follows (reader_id, journalist_id) VALUES (?, ?)",
            reader,
            journalist.into(),
        )
        .await
    }

    async fn remove_journalist(&self, reader: UserId, journalist: UserId) -> DomainResult<()> {
        self.execute_edge(
            "DELETE FROM reader_journalist_follows WHERE reader_id = ? AND journalist_id = ?",
            reader,
            journalist.into(),
        )
        .await
    }

    async fn for_reader(&self, reader: UserId) -> DomainResult<ReaderSubscriptions> {
        let publishers = sqlx::query_scalar::<_, i64>(
            "SELECT publisher_id FROM reader_publisher_subscriptions WHERE reader_id = ?",
        )
        .bind(i64::from(reader))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let journalists = sqlx::query_scalar::<_, i64>(
            "SELECT journalist_id FROM reader_journalist_follows WHERE reader_id = ?",
        )
        .bind(i64::from(reader))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ReaderSubscriptions {
            publishers: publishers
                .into_iter()
                .map(PublisherId::new)
                .collect::<DomainResult<_>>()?,
            journalists: journalists
                .into_iter()
                .map(UserId::new)
                .collect::<DomainResult<_>>()?,
        })
    }

    async fn publisher_subscribers(&self, publisher: PublisherId) -> DomainResult<Vec<Subscriber>> {
        self.subscribers(
            "SELECT u.id, u.username, u.email FROM users u
             JOIN reader_publisher_subscriptions s ON s.reader_id = u.id
             WHERE s.publisher_id = ? AND u.is_active = 1
             ORDER BY u.id ASC",
            publisher.into(),
        )
        .await
    }

    async fn journalist_followers(&self, journalist: UserId) -> DomainResult<Vec<Subscriber>> {
        self.subscribers(
            "SELECT u.id, u.username, u.email FROM users u
             JOIN reader_journalist_follows f ON f.reader_id = u.id
             WHERE f.journalist_id = ? AND u.is_active = 1
             ORDER BY u.id ASC",
            journalist.into(),
        )
        .await
    }
}
