use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};
use uuid::Uuid;

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
    /// Where the client should go next, based on the user's role.
    pub dashboard: &'static str,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self
            .find_and_authenticate_user(username, &command.password)
            .await?;

        let session_id = Uuid::new_v4().to_string();
        let token = self.issue_session_token(&user, &session_id).await?;
        let dashboard = user.role.dashboard_path();

        tracing::info!(user_id = %user.id, role = %user.role, "user logged in");
        Ok(LoginResult {
            token,
            user: user.into(),
            dashboard,
        })
    }

    async fn issue_session_token(
        &self,
        user: &User,
        session_id: &str,
    ) -> ApplicationResult<AuthTokenDto> {
        let subject = TokenSubject {
            user_id: user.id,
            username: user.username.to_string(),
            role: user.role,
            capabilities: user.role.default_capabilities(),
            session_id: Some(session_id.to_string()),
        };

        self.token_manager.issue(subject).await
    }

    async fn find_and_authenticate_user(
        &self,
        username: Username,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        if !user.is_active {
            return Err(ApplicationError::forbidden("account is disabled"));
        }

        Ok(user)
    }
}
