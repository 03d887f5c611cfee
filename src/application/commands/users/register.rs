use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, NewUser, PasswordHash, Role, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub bio: Option<String>,
}

impl UserCommandService {
    /// Readers and journalists may sign themselves up. Editor accounts are
    /// created by an existing editor, except for the very first account, which
    /// always becomes an editor.
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = EmailAddress::new(command.email)?;
        validate_password(&command.password)?;

        let bootstrap = self.user_repo.count().await? == 0;
        if !bootstrap {
            determine_role(actor, command.role)?;
        }

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let created_at = self.clock.now();
        let build = |role: Role| {
            NewUser::new(
                username.clone(),
                email.clone(),
                password_hash.clone(),
                role,
                command.bio.clone(),
                created_at,
            )
        };

        let first = if bootstrap {
            self.user_repo.insert_first(build(Role::Editor)?).await?
        } else {
            None
        };
        let user = match first {
            Some(user) => user,
            // Not the first account, or another registration claimed that slot.
            None => {
                let role = determine_role(actor, command.role)?;
                self.user_repo.insert(build(role)?).await?
            }
        };

        tracing::info!(user_id = %user.id, role = %user.role, "user registered");
        Ok(user.into())
    }
}

fn determine_role(
    actor: Option<&AuthenticatedUser>,
    requested: Option<Role>,
) -> ApplicationResult<Role> {
    match requested.unwrap_or_default() {
        Role::Editor => {
            let requester = actor.ok_or_else(|| {
                ApplicationError::forbidden("only editors may create editor accounts")
            })?;
            requester.ensure_capability("users", "create:editor")?;
            Ok(Role::Editor)
        }
        role @ (Role::Reader | Role::Journalist) => Ok(role),
    }
}
