use std::sync::Arc;

use techfolks_inquiry::{
    COMPANY_PLACEHOLDER, DeliveryError, Error, InquiryDraft, InquirySubmitter, Recipient,
    REQUIREMENTS_PLACEHOLDER, normalize,
};
use time::macros::datetime;

mod helpers;

use helpers::RecordingDelivery;

#[test]
fn test_normalize_maps_codes_to_labels() {
    let normalized = normalize(&helpers::valid_draft());

    assert_eq!(normalized.project_type, "E-commerce Store");
    assert_eq!(normalized.budget_range, "$1,000 - $3,000");
    assert_eq!(normalized.timeline, "ASAP");
    assert_eq!(normalized.contact_method, "Email");
    assert_eq!(normalized.best_time_to_contact, "Anytime");
    assert_eq!(normalized.company, COMPANY_PLACEHOLDER);
    assert_eq!(normalized.specific_requirements, REQUIREMENTS_PLACEHOLDER);
    assert_eq!(
        normalized.project_description,
        "Need a 20+ character description here."
    );
}

#[test]
fn test_normalize_passes_unknown_codes_through() {
    let draft = InquiryDraft {
        project_type: "landing-page".to_owned(),
        budget_range: "10k".to_owned(),
        contact_method: "carrier-pigeon".to_owned(),
        company: "Lee Bakery".to_owned(),
        specific_requirements: "  needs a shop  ".to_owned(),
        ..helpers::valid_draft()
    };

    let normalized = normalize(&draft);

    assert_eq!(normalized.project_type, "landing-page");
    assert_eq!(normalized.budget_range, "10k");
    assert_eq!(normalized.contact_method, "carrier-pigeon");
    assert_eq!(normalized.company, "Lee Bakery");
    assert_eq!(normalized.specific_requirements, "  needs a shop  ");
}

#[test]
fn test_payload_carries_subject_and_timestamp() -> anyhow::Result<()> {
    let submitter = helpers::submitter(Arc::new(RecordingDelivery::default()));
    let payload = submitter.payload(
        &helpers::valid_draft(),
        datetime!(2026-03-04 09:05:06 UTC),
    )?;

    assert_eq!(payload.subject, "New Website Inquiry from Ann Lee");
    assert_eq!(payload.to_name, "Techfolks Team");
    assert_eq!(payload.to_email, "team@techfolks.localhost");
    assert_eq!(payload.from_email, "ann@x.com");
    assert_eq!(payload.reply_to, "ann@x.com");
    assert_eq!(payload.submitted_at, "2026-03-04T09:05:06Z");
    assert_eq!(payload.inquiry_date, "2026-03-04");
    assert_eq!(payload.inquiry_time, "09:05:06 UTC");

    let fields = payload.fields();
    assert!(fields.contains(&("budget_range", "$1,000 - $3,000")));
    assert!(fields.contains(&("company", "Not specified")));
    assert_eq!(fields.len(), 18);

    Ok(())
}

#[test]
fn test_payload_timestamp_is_utc() -> anyhow::Result<()> {
    let submitter = helpers::submitter(Arc::new(RecordingDelivery::default()));
    let payload = submitter.payload(
        &helpers::valid_draft(),
        datetime!(2026-03-04 23:30:00 -02:00),
    )?;

    assert_eq!(payload.inquiry_date, "2026-03-05");
    assert_eq!(payload.inquiry_time, "01:30:00 UTC");

    Ok(())
}

#[tokio::test]
async fn test_send_hands_payload_to_delivery() -> anyhow::Result<()> {
    let delivery = Arc::new(RecordingDelivery::default());
    let submitter = helpers::submitter(delivery.clone());

    submitter.send(&helpers::valid_draft()).await?;

    let payload = delivery.last().expect("payload recorded");
    assert_eq!(payload.project_type, "E-commerce Store");
    assert_eq!(payload.timeline, "ASAP");
    assert_eq!(submitter.route().service_id, "service_test");

    Ok(())
}

#[tokio::test]
async fn test_send_classifies_collaborator_errors() {
    let cases = [
        ("Invalid service ID", DeliveryError::Service),
        ("network timeout", DeliveryError::Network),
        ("TypeError: Failed to fetch", DeliveryError::Network),
        ("The template ID not found", DeliveryError::Template),
        ("Invalid public key", DeliveryError::Authentication),
        ("quota exceeded", DeliveryError::Generic),
    ];

    for (message, expected) in cases {
        let delivery = Arc::new(RecordingDelivery::failing(message));
        let submitter = helpers::submitter(delivery.clone());

        let err = submitter.send(&helpers::valid_draft()).await.unwrap_err();

        assert_eq!(err, expected, "{message}");
        assert!(!err.to_string().contains(message), "{message}");
        assert_eq!(delivery.calls(), 1);
    }
}

#[tokio::test]
async fn test_send_classifies_error_context_chain() {
    struct Contextual;

    #[async_trait::async_trait]
    impl techfolks_inquiry::Delivery for Contextual {
        async fn deliver(
            &self,
            _route: &techfolks_inquiry::DeliveryRoute,
            _payload: &techfolks_inquiry::InquiryPayload,
        ) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("connection reset").context("Network request failed"))
        }
    }

    let submitter = helpers::submitter(Arc::new(Contextual));
    let err = submitter.send(&helpers::valid_draft()).await.unwrap_err();

    assert_eq!(err, DeliveryError::Network);
}

#[test]
fn test_new_rejects_invalid_recipient() {
    let result = InquirySubmitter::new(
        helpers::route(),
        Recipient {
            name: "Techfolks Team".to_owned(),
            email: "not an email".to_owned(),
        },
        Arc::new(RecordingDelivery::default()),
    );

    assert!(matches!(result, Err(Error::Validate(_))));
}
