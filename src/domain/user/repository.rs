use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::{Role, UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn count(&self) -> DomainResult<u64>;

    /// Persists the user together with its membership in the group named
    /// after its role. Either both are stored or neither is.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    /// Same as `insert`, but only while no user exists at all. Returns `None`
    /// when the table already holds an account.
    async fn insert_first(&self, new_user: NewUser) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Looks up `id` restricted to users whose role is journalist.
    async fn find_journalist(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn list_by_role(&self, role: Role) -> DomainResult<Vec<User>>;

    async fn group_names(&self, id: UserId) -> DomainResult<Vec<String>>;
}
