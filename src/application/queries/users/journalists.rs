use super::UserQueryService;
use crate::{
    application::{dto::JournalistDto, error::ApplicationResult},
    domain::user::Role,
};

impl UserQueryService {
    pub async fn list_journalists(&self) -> ApplicationResult<Vec<JournalistDto>> {
        let journalists = self.user_repo.list_by_role(Role::Journalist).await?;
        Ok(journalists.into_iter().map(JournalistDto::from).collect())
    }
}
