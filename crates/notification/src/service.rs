//! Inquiry delivery over SMTP using lettre

use anyhow::Context;
use lettre::{
    Address, Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;
use techfolks_inquiry::{Delivery, DeliveryRoute, InquiryPayload};

use crate::template::{InquiryAutoReplyTemplate, InquiryNotificationTemplate, render};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    pub from_address: String,
    #[serde(default)]
    pub support_phone: String,
}

/// Sends the staff notification and the client auto-reply
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
    support_phone: String,
    skip_sending: bool,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
            support_phone: config.support_phone.clone(),
            skip_sending: false,
        })
    }

    /// Builds messages as usual but never opens an SMTP connection.
    pub fn new_mock(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = SmtpTransport::builder_dangerous("localhost")
            .port(1025)
            .build();

        tracing::info!(
            from = %config.from_address,
            "Mock email service initialized (SMTP calls skipped)"
        );

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
            support_phone: config.support_phone.clone(),
            skip_sending: true,
        })
    }

    /// Staff notification, replying to the client.
    pub fn notification(&self, payload: &InquiryPayload) -> anyhow::Result<Message> {
        let body = render(InquiryNotificationTemplate { payload })
            .context("Failed to render inquiry notification template")?;

        let message = Message::builder()
            .from(self.from.parse::<Mailbox>().context("Failed to parse from address")?)
            .reply_to(mailbox(&payload.from_name, &payload.reply_to)?)
            .to(mailbox(&payload.to_name, &payload.to_email)?)
            .subject(&payload.subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(body)?;

        Ok(message)
    }

    /// Client acknowledgement, replying to the staff mailbox.
    pub fn auto_reply(&self, payload: &InquiryPayload) -> anyhow::Result<Message> {
        let body = render(InquiryAutoReplyTemplate {
            payload,
            support_phone: &self.support_phone,
        })
        .context("Failed to render inquiry auto-reply template")?;

        let message = Message::builder()
            .from(self.from.parse::<Mailbox>().context("Failed to parse from address")?)
            .reply_to(mailbox(&payload.to_name, &payload.to_email)?)
            .to(mailbox(&payload.from_name, &payload.from_email)?)
            .subject(format!("We received your inquiry, {}", payload.from_name))
            .header(header::ContentType::TEXT_PLAIN)
            .body(body)?;

        Ok(message)
    }

    async fn send(&self, message: Message) -> anyhow::Result<()> {
        if self.skip_sending {
            tracing::info!("Mock email service: Skipping actual SMTP send (test mode)");
            return Ok(());
        }

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .context("SMTP send task failed")?
            .context("Network error while talking to the SMTP server")?;

        Ok(())
    }
}

fn mailbox(name: &str, email: &str) -> anyhow::Result<Mailbox> {
    Ok(Mailbox::new(
        Some(name.to_owned()),
        email
            .parse::<Address>()
            .with_context(|| format!("Failed to parse address {email}"))?,
    ))
}

#[async_trait::async_trait]
impl Delivery for EmailService {
    #[tracing::instrument(skip_all, fields(to = %payload.to_email, template = %route.template_id))]
    async fn deliver(&self, route: &DeliveryRoute, payload: &InquiryPayload) -> anyhow::Result<()> {
        self.send(self.notification(payload)?).await?;
        tracing::info!("Inquiry notification sent");

        // The inquiry already reached staff; a failed acknowledgement is not
        // reported to the client.
        match self.auto_reply(payload) {
            Ok(message) => {
                if let Err(err) = self.send(message).await {
                    tracing::warn!(error = %format!("{err:#}"), "Failed to send inquiry auto-reply");
                }
            }
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "Failed to build inquiry auto-reply");
            }
        }

        Ok(())
    }
}
