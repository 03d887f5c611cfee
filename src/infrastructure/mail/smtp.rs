use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::mailer::{Mailer, OutgoingMail},
};
use crate::config::SmtpConfig;
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType, transport::smtp::authentication::Credentials,
};

/// Delivers mail through an SMTP relay using STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> ApplicationResult<Self> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|err| {
                ApplicationError::infrastructure(format!("failed to create SMTP transport: {err}"))
            })?
            .port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

fn build_message(mail: &OutgoingMail) -> ApplicationResult<Message> {
    let mut builder = Message::builder()
        .from(mail.from.parse().map_err(|err| {
            ApplicationError::validation(format!("invalid from address: {err}"))
        })?)
        .subject(mail.subject.clone())
        .header(ContentType::TEXT_PLAIN);

    for recipient in &mail.to {
        builder = builder.to(recipient.parse().map_err(|err| {
            ApplicationError::validation(format!("invalid recipient address: {err}"))
        })?);
    }

    builder
        .body(mail.body.clone())
        .map_err(|err| ApplicationError::infrastructure(format!("failed to build email: {err}")))
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> ApplicationResult<()> {
        let message = build_message(&mail)?;
        self.transport
            .send(message)
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("failed to send email: {err}")))?;
        Ok(())
    }
}
