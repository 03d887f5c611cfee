// src/infrastructure/repositories/sqlite_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    EmailAddress, NewUser, PasswordHash, Role, User, UserId, UserRepository, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

const USER_COLUMNS: &str = "id, username, email, password_hash, role, bio, is_active, created_at";

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Writes the user row and its role-group membership in one transaction.
    /// With `only_if_empty` the row is written only while the table has no
    /// users; `None` means another account got there first.
    async fn insert_with_role_group(
        &self,
        new_user: NewUser,
        only_if_empty: bool,
    ) -> DomainResult<Option<User>> {
        let NewUser {
            username,
            email,
            password_hash,
            role,
            bio,
            is_active,
            created_at,
        } = new_user;

        let guard = if only_if_empty {
            " WHERE NOT EXISTS (SELECT 1 FROM users)"
        } else {
            ""
        };

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (username, email, password_hash, role, bio, is_active, created_at)
             SELECT ?, ?, ?, ?, ?, ?, ?{guard}
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(role.as_str())
        .bind(bio)
        .bind(is_active)
        .bind(created_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| match map_sqlx(err) {
            DomainError::Conflict(_) => DomainError::Conflict("username already exists".into()),
            other => other,
        })?;

        let Some(row) = row else {
            return Ok(None);
        };
        let user = User::try_from(row)?;

        attach_role_group(&mut *tx, user.id, user.role).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(Some(user))
    }
}

async fn attach_role_group(
    conn: &mut SqliteConnection,
    id: UserId,
    role: Role,
) -> DomainResult<()> {
    sqlx::query("INSERT OR IGNORE INTO groups (name) VALUES (?)")
        .bind(role.as_str())
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    sqlx::query(
        "INSERT OR IGNORE INTO user_groups (user_id, group_id)
         SELECT ?, id FROM groups WHERE name = ?",
    )
    .bind(i64::from(id))
    .bind(role.as_str())
    .execute(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    Ok(())
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    bio: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            email: EmailAddress::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse::<Role>()?,
            bio: row.bio,
            is_active: row.is_active,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        self.insert_with_role_group(new_user, false)
            .await?
            .ok_or_else(|| DomainError::Persistence("insert returned no row".into()))
    }

    async fn insert_first(&self, new_user: NewUser) -> DomainResult<Option<User>> {
        self.insert_with_role_group(new_user, true).await
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_journalist(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ? AND role = 'journalist'"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn list_by_role(&self, role: Role) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = ? ORDER BY username ASC"
        ))
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn group_names(&self, id: UserId) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT g.name FROM groups g
             JOIN user_groups ug ON ug.group_id = g.id
             WHERE ug.user_id = ?
             ORDER BY g.name ASC",
        )
        .bind(i64::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
