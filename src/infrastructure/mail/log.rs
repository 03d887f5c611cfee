use crate::application::{
    ApplicationResult,
    ports::mailer::{Mailer, OutgoingMail},
};
use async_trait::async_trait;

/// Writes outgoing mail to the log instead of sending it. Used when no SMTP
/// relay is configured.
#[derive(Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, mail: OutgoingMail) -> ApplicationResult<()> {
        tracing::info!(
            from = %mail.from,
            to = ?mail.to,
            subject = %mail.subject,
            body_len = mail.body.len(),
            "mail not sent (no SMTP relay configured)"
        );
        Ok(())
    }
}
