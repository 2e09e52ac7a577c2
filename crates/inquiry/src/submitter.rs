use std::sync::Arc;

use serde::Serialize;
use time::OffsetDateTime;
use validator::Validate;

use crate::{
    BudgetRange, CodeTable, ContactMethod, ContactTime, Delivery, DeliveryError, DeliveryRoute,
    InquiryDraft, InquiryPayload, ProjectType, Recipient, Result, Timeline,
};

pub const COMPANY_PLACEHOLDER: &str = "Not specified";
pub const REQUIREMENTS_PLACEHOLDER: &str = "None specified";

/// A draft with its codes replaced by display labels and its empty optional
/// fields replaced by placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedInquiry {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub project_type: String,
    pub budget_range: String,
    pub timeline: String,
    pub project_description: String,
    pub specific_requirements: String,
    pub contact_method: String,
    pub best_time_to_contact: String,
}

/// Unknown codes are kept as-is rather than rejected.
pub fn normalize(draft: &InquiryDraft) -> NormalizedInquiry {
    NormalizedInquiry {
        full_name: draft.full_name.to_owned(),
        email: draft.email.to_owned(),
        phone: draft.phone.to_owned(),
        company: or_placeholder(&draft.company, COMPANY_PLACEHOLDER),
        project_type: ProjectType::label_for(&draft.project_type).to_owned(),
        budget_range: BudgetRange::label_for(&draft.budget_range).to_owned(),
        timeline: Timeline::label_for(&draft.timeline).to_owned(),
        project_description: draft.project_description.to_owned(),
        specific_requirements: or_placeholder(
            &draft.specific_requirements,
            REQUIREMENTS_PLACEHOLDER,
        ),
        contact_method: ContactMethod::label_for(&draft.contact_method).to_owned(),
        best_time_to_contact: ContactTime::label_for(&draft.best_time_to_contact).to_owned(),
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_owned()
    } else {
        value.to_owned()
    }
}

/// Turns validated drafts into delivery requests.
#[derive(Clone)]
pub struct InquirySubmitter {
    route: DeliveryRoute,
    recipient: Recipient,
    delivery: Arc<dyn Delivery>,
}

impl InquirySubmitter {
    pub fn new(
        route: DeliveryRoute,
        recipient: Recipient,
        delivery: Arc<dyn Delivery>,
    ) -> Result<Self> {
        recipient.validate()?;

        Ok(Self {
            route,
            recipient,
            delivery,
        })
    }

    pub fn route(&self) -> &DeliveryRoute {
        &self.route
    }

    pub fn payload(
        &self,
        draft: &InquiryDraft,
        submitted_at: OffsetDateTime,
    ) -> std::result::Result<InquiryPayload, time::error::Format> {
        InquiryPayload::new(&self.recipient, normalize(draft), submitted_at)
    }

    /// Sends one inquiry. No retry; the caller decides whether to resubmit.
    #[tracing::instrument(skip_all, fields(from = %draft.email))]
    pub async fn send(&self, draft: &InquiryDraft) -> std::result::Result<(), DeliveryError> {
        let payload = match self.payload(draft, OffsetDateTime::now_utc()) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(error = %err, "Failed to format inquiry timestamp");
                return Err(DeliveryError::Generic);
            }
        };

        tracing::debug!(subject = %payload.subject, "Sending inquiry");

        match self.delivery.deliver(&self.route, &payload).await {
            Ok(()) => {
                tracing::info!(
                    subject = %payload.subject,
                    project_type = %payload.project_type,
                    "Inquiry delivered"
                );

                Ok(())
            }
            Err(err) => {
                let detail = format!("{err:#}");
                let kind = DeliveryError::classify(&detail);

                tracing::error!(
                    error = %detail,
                    kind = ?kind,
                    configuration = kind.is_configuration(),
                    "Failed to deliver inquiry"
                );

                Err(kind)
            }
        }
    }
}
