use std::sync::Arc;

use crate::domain::publisher::PublisherRepository;

pub struct PublisherCommandService {
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
}

impl PublisherCommandService {
    pub fn new(publisher_repo: Arc<dyn PublisherRepository>) -> Self {
        Self { publisher_repo }
    }
}
