use super::UserCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

impl UserCommandService {
    /// Revokes the session carried by the caller's token. Tokens without a
    /// session id cannot be revoked and are left to expire.
    pub async fn logout(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        if let Some(session_id) = actor.session_id.as_deref() {
            self.session_revocation_store
                .revoke(session_id, actor.expires_at)
                .await?;
            tracing::info!(user_id = %actor.id, "session revoked");
        }
        Ok(())
    }
}
