use serde::{Deserialize, Serialize};
use time::{
    OffsetDateTime,
    format_description::well_known::Rfc3339,
    macros::format_description,
};
use validator::Validate;

use crate::NormalizedInquiry;

/// Identifiers the delivery provider uses to pick a route and template, plus
/// the credential it authenticates with. Passed through untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DeliveryRoute {
    #[validate(length(min = 1))]
    pub service_id: String,
    #[validate(length(min = 1))]
    pub template_id: String,
    #[validate(length(min = 1))]
    pub public_key: String,
}

/// Staff mailbox receiving inquiries.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Recipient {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

/// Provider-agnostic message handed to a [`Delivery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryPayload {
    pub to_name: String,
    pub to_email: String,
    pub from_name: String,
    pub from_email: String,
    pub reply_to: String,
    pub phone: String,
    pub company: String,
    pub project_type: String,
    pub budget_range: String,
    pub timeline: String,
    pub project_description: String,
    pub specific_requirements: String,
    pub contact_method: String,
    pub best_time: String,
    pub subject: String,
    pub submitted_at: String,
    pub inquiry_date: String,
    pub inquiry_time: String,
}

impl InquiryPayload {
    pub fn new(
        recipient: &Recipient,
        inquiry: NormalizedInquiry,
        submitted_at: OffsetDateTime,
    ) -> Result<Self, time::error::Format> {
        let submitted_at = submitted_at.to_offset(time::UtcOffset::UTC);

        Ok(Self {
            to_name: recipient.name.to_owned(),
            to_email: recipient.email.to_owned(),
            subject: format!("New Website Inquiry from {}", inquiry.full_name),
            reply_to: inquiry.email.to_owned(),
            from_name: inquiry.full_name,
            from_email: inquiry.email,
            phone: inquiry.phone,
            company: inquiry.company,
            project_type: inquiry.project_type,
            budget_range: inquiry.budget_range,
            timeline: inquiry.timeline,
            project_description: inquiry.project_description,
            specific_requirements: inquiry.specific_requirements,
            contact_method: inquiry.contact_method,
            best_time: inquiry.best_time_to_contact,
            submitted_at: submitted_at.format(&Rfc3339)?,
            inquiry_date: submitted_at.format(format_description!("[year]-[month]-[day]"))?,
            inquiry_time: submitted_at
                .format(format_description!("[hour]:[minute]:[second] UTC"))?,
        })
    }

    /// The payload as a flat list of named string fields.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("to_name", self.to_name.as_str()),
            ("to_email", self.to_email.as_str()),
            ("from_name", self.from_name.as_str()),
            ("from_email", self.from_email.as_str()),
            ("reply_to", self.reply_to.as_str()),
            ("phone", self.phone.as_str()),
            ("company", self.company.as_str()),
            ("project_type", self.project_type.as_str()),
            ("budget_range", self.budget_range.as_str()),
            ("timeline", self.timeline.as_str()),
            ("project_description", self.project_description.as_str()),
            ("specific_requirements", self.specific_requirements.as_str()),
            ("contact_method", self.contact_method.as_str()),
            ("best_time", self.best_time.as_str()),
            ("subject", self.subject.as_str()),
            ("submitted_at", self.submitted_at.as_str()),
            ("inquiry_date", self.inquiry_date.as_str()),
            ("inquiry_time", self.inquiry_time.as_str()),
        ]
    }
}

/// Outbound email collaborator. Errors are textual; the submitter classifies
/// them from their rendered message.
#[async_trait::async_trait]
pub trait Delivery: Send + Sync {
    async fn deliver(&self, route: &DeliveryRoute, payload: &InquiryPayload)
    -> anyhow::Result<()>;
}
