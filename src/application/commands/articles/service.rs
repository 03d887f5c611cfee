// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{notifications::NotificationDispatcher, ports::time::Clock},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        publisher::PublisherRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) dispatcher: Arc<NotificationDispatcher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        dispatcher: Arc<NotificationDispatcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            publisher_repo,
            dispatcher,
            clock,
        }
    }
}
