use super::PublisherCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PublisherDto},
        error::ApplicationResult,
    },
    domain::publisher::{NewPublisher, PublisherName},
};

pub struct CreatePublisherCommand {
    pub name: String,
    pub description: Option<String>,
}

impl PublisherCommandService {
    pub async fn create_publisher(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePublisherCommand,
    ) -> ApplicationResult<PublisherDto> {
        actor.ensure_capability("publishers", "manage")?;
        let name = PublisherName::new(command.name)?;
        let created = self
            .publisher_repo
            .insert(NewPublisher::new(name, command.description))
            .await?;
        tracing::info!(publisher_id = created.id.0, name = %created.name, "publisher created");
        Ok(created.into())
    }
}
