use std::sync::Arc;

use anyhow::Context;
use techfolks_inquiry::{Delivery, DeliveryRoute, InquiryPayload, InquirySubmitter};
use techfolks_notification::{EmailJsDelivery, EmailService};

use crate::config::{Config, Provider};

/// Logs the inquiry instead of sending it. Used in development.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDelivery;

#[async_trait::async_trait]
impl Delivery for LogDelivery {
    async fn deliver(&self, route: &DeliveryRoute, payload: &InquiryPayload) -> anyhow::Result<()> {
        tracing::info!(
            template_id = %route.template_id,
            to = %payload.to_email,
            from = %payload.from_email,
            subject = %payload.subject,
            project_type = %payload.project_type,
            budget_range = %payload.budget_range,
            "Inquiry logged, no email sent"
        );

        Ok(())
    }
}

pub fn create_delivery(config: &Config) -> anyhow::Result<Arc<dyn Delivery>> {
    let delivery: Arc<dyn Delivery> = match config.delivery.provider {
        Provider::Log => Arc::new(LogDelivery),
        Provider::EmailJs => Arc::new(EmailJsDelivery::new(&config.emailjs)?),
        Provider::Smtp => Arc::new(EmailService::new(&config.email)?),
    };

    tracing::info!(provider = ?config.delivery.provider, "Inquiry delivery configured");

    Ok(delivery)
}

pub fn create_submitter(
    config: &Config,
    delivery: Arc<dyn Delivery>,
) -> anyhow::Result<InquirySubmitter> {
    InquirySubmitter::new(config.delivery.route(), config.delivery.recipient(), delivery)
        .context("Invalid inquiry recipient")
}
