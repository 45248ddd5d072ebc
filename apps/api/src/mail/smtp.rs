//! SMTP delivery backend over lettre's async submission transport.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, Message, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::info;

use crate::config::Config;
use crate::mail::{DeliveryOutcome, EmailRequest, MailError, Mailer};

/// Sends mail through the configured relay using STARTTLS submission.
///
/// Credentials come from the injected [`Config`] at construction time.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &Config) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.mail_host)?
            .port(config.mail_port)
            .credentials(Credentials::new(
                config.mail_user.clone(),
                config.mail_password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.mail_from.parse()?,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, request: &EmailRequest) -> Result<DeliveryOutcome, MailError> {
        let message = build_message(&self.from, request)?;

        let response = self.transport.send(message).await?;
        let message_id = response.message().collect::<Vec<&str>>().join(" ");
        if !response.is_positive() {
            return Err(MailError::Relay(message_id));
        }

        info!(to = %request.to, "email accepted by relay: {message_id}");

        Ok(DeliveryOutcome { message_id })
    }
}

/// Assembles the wire message: a plain HTML part when there are no
/// attachments, otherwise multipart/mixed with one part per attachment.
fn build_message(from: &Mailbox, request: &EmailRequest) -> Result<Message, MailError> {
    let builder = Message::builder()
        .from(from.clone())
        .to(request.to.parse()?)
        .subject(request.subject.clone());

    if request.attachments.is_empty() {
        return Ok(builder.singlepart(SinglePart::html(request.html.clone()))?);
    }

    let mut parts = MultiPart::mixed().singlepart(SinglePart::html(request.html.clone()));
    for attachment in &request.attachments {
        if attachment.content.is_empty() {
            return Err(MailError::EmptyAttachment(attachment.filename.clone()));
        }
        let content_type = ContentType::parse(&attachment.content_type)
            .map_err(|_| MailError::ContentType(attachment.content_type.clone()))?;
        parts = parts.singlepart(
            Attachment::new(attachment.filename.clone())
                .body(attachment.content.clone(), content_type),
        );
    }

    Ok(builder.multipart(parts)?)
}
