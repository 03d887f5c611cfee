use super::PublisherCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::publisher::PublisherId,
};

pub struct DeletePublisherCommand {
    pub id: i64,
}

impl PublisherCommandService {
    /// Deleting a publisher also deletes its articles and subscriptions.
    pub async fn delete_publisher(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePublisherCommand,
    ) -> ApplicationResult<()> {
        actor.ensure_capability("publishers", "manage")?;
        let id = PublisherId::new(command.id)
            .map_err(|_| ApplicationError::not_found("publisher not found"))?;
        if !self.publisher_repo.delete(id).await? {
            return Err(ApplicationError::not_found("publisher not found"));
        }
        tracing::info!(publisher_id = id.0, "publisher deleted");
        Ok(())
    }
}
