use std::sync::Arc;

use crate::{
    application::{dto::PublisherDto, error::ApplicationResult},
    domain::publisher::PublisherRepository,
};

pub struct PublisherQueryService {
    publisher_repo: Arc<dyn PublisherRepository>,
}

impl PublisherQueryService {
    pub fn new(publisher_repo: Arc<dyn PublisherRepository>) -> Self {
        Self { publisher_repo }
    }

    /// All publishers, ordered by name.
    pub async fn list_publishers(&self) -> ApplicationResult<Vec<PublisherDto>> {
        let publishers = self.publisher_repo.list().await?;
        Ok(publishers.into_iter().map(PublisherDto::from).collect())
    }
}
