// src/domain/user/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::value_objects::{EmailAddress, PasswordHash, Role, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Builds a user record, dropping data that does not belong to `role`.
    pub fn new(
        username: Username,
        email: EmailAddress,
        password_hash: PasswordHash,
        role: Role,
        bio: Option<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let bio = if role.keeps_bio() {
            bio.map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
        } else {
            None
        };

        if bio.as_ref().is_some_and(|text| text.len() > 10_000) {
            return Err(DomainError::Validation(
                "bio must be at most 10000 bytes".into(),
            ));
        }

        Ok(Self {
            username,
            email,
            password_hash,
            role,
            bio,
            is_active: true,
            created_at,
        })
    }
}
