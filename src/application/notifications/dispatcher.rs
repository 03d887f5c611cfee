// src/application/notifications/dispatcher.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::mailer::{Mailer, OutgoingMail},
    },
    domain::{
        article::Article,
        subscription::{NotificationAudience, Subscriber, SubscriptionRepository},
    },
};

/// Per-approval delivery tally. Failed sends are counted, never raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub recipients: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// Emails every reader interested in a newly approved article.
pub struct NotificationDispatcher {
    subscriptions: Arc<dyn SubscriptionRepository>,
    mailer: Arc<dyn Mailer>,
    sender: String,
}

impl NotificationDispatcher {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        mailer: Arc<dyn Mailer>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            subscriptions,
            mailer,
            sender: sender.into(),
        }
    }

    pub async fn audience_for(&self, article: &Article) -> ApplicationResult<NotificationAudience> {
        let publisher_subscribers = self
            .subscriptions
            .publisher_subscribers(article.publisher_id)
            .await?;
        let journalist_followers = match article.journalist_id {
            Some(journalist) => self.subscriptions.journalist_followers(journalist).await?,
            None => Vec::new(),
        };

        Ok(NotificationAudience::union(
            publisher_subscribers,
            journalist_followers,
        ))
    }

    pub fn compose(&self, article: &Article, recipient: &Subscriber) -> OutgoingMail {
        OutgoingMail {
            subject: format!("New Article: {}", article.title),
            body: article.content.as_str().to_string(),
            from: self.sender.clone(),
            to: vec![recipient.email.to_string()],
        }
    }

    /// Sends one message per audience member, sequentially.
    pub async fn dispatch(&self, article: &Article) -> ApplicationResult<DispatchReport> {
        let audience = self.audience_for(article).await?;
        let mut report = DispatchReport {
            recipients: audience.len(),
            ..DispatchReport::default()
        };

        for recipient in audience.iter() {
            let mail = self.compose(article, recipient);
            match self.mailer.send(mail).await {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    report.failed += 1;
                    tracing::warn!(
                        article_id = %article.id,
                        recipient = %recipient.user_id,
                        error = %err,
                        "article notification not delivered"
                    );
                }
            }
        }

        tracing::debug!(
            article_id = %article.id,
            recipients = report.recipients,
            delivered = report.delivered,
            failed = report.failed,
            "article notifications dispatched"
        );

        Ok(report)
    }
}
