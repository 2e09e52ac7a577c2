#![allow(dead_code)]

use techfolks_inquiry::{DeliveryRoute, InquiryDraft, InquiryPayload, Recipient, normalize};
use time::macros::datetime;

pub fn route() -> DeliveryRoute {
    DeliveryRoute {
        service_id: "service_test".to_owned(),
        template_id: "template_test".to_owned(),
        public_key: "public_test".to_owned(),
    }
}

pub fn payload() -> InquiryPayload {
    let draft = InquiryDraft {
        full_name: "Ann Lee".to_owned(),
        email: "ann@x.com".to_owned(),
        phone: "555-1111".to_owned(),
        project_type: "ecommerce".to_owned(),
        budget_range: "1000-3000".to_owned(),
        timeline: "asap".to_owned(),
        project_description: "Need a 20+ character description here.".to_owned(),
        ..Default::default()
    };

    let recipient = Recipient {
        name: "Techfolks Team".to_owned(),
        email: "team@techfolks.localhost".to_owned(),
    };

    InquiryPayload::new(
        &recipient,
        normalize(&draft),
        datetime!(2026-03-04 09:05:06 UTC),
    )
    .expect("fixed timestamp formats")
}
