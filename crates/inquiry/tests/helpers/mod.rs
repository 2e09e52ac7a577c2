#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use techfolks_inquiry::{
    Delivery, DeliveryRoute, InquiryDraft, InquiryPayload, InquirySubmitter, Recipient,
};
use tokio::sync::Notify;

pub fn valid_draft() -> InquiryDraft {
    InquiryDraft {
        full_name: "Ann Lee".to_owned(),
        email: "ann@x.com".to_owned(),
        phone: "555-1111".to_owned(),
        project_type: "ecommerce".to_owned(),
        budget_range: "1000-3000".to_owned(),
        timeline: "asap".to_owned(),
        project_description: "Need a 20+ character description here.".to_owned(),
        ..Default::default()
    }
}

pub fn route() -> DeliveryRoute {
    DeliveryRoute {
        service_id: "service_test".to_owned(),
        template_id: "template_test".to_owned(),
        public_key: "public_test".to_owned(),
    }
}

pub fn recipient() -> Recipient {
    Recipient {
        name: "Techfolks Team".to_owned(),
        email: "team@techfolks.localhost".to_owned(),
    }
}

pub fn submitter(delivery: Arc<dyn Delivery>) -> InquirySubmitter {
    InquirySubmitter::new(route(), recipient(), delivery).expect("test recipient is valid")
}

/// Records every payload; fails with `error` when set.
#[derive(Default)]
pub struct RecordingDelivery {
    pub error: Option<String>,
    pub payloads: Mutex<Vec<InquiryPayload>>,
}

impl RecordingDelivery {
    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<InquiryPayload> {
        self.payloads.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl Delivery for RecordingDelivery {
    async fn deliver(
        &self,
        _route: &DeliveryRoute,
        payload: &InquiryPayload,
    ) -> anyhow::Result<()> {
        self.payloads.lock().unwrap().push(payload.clone());

        match &self.error {
            Some(error) => Err(anyhow::anyhow!("{error}")),
            None => Ok(()),
        }
    }
}

/// Blocks every delivery until `open` is notified.
#[derive(Default)]
pub struct GatedDelivery {
    pub open: Notify,
    pub calls: AtomicUsize,
}

#[async_trait::async_trait]
impl Delivery for GatedDelivery {
    async fn deliver(
        &self,
        _route: &DeliveryRoute,
        _payload: &InquiryPayload,
    ) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.open.notified().await;

        Ok(())
    }
}

pub struct PanickingDelivery;

#[async_trait::async_trait]
impl Delivery for PanickingDelivery {
    async fn deliver(
        &self,
        _route: &DeliveryRoute,
        _payload: &InquiryPayload,
    ) -> anyhow::Result<()> {
        panic!("delivery collaborator blew up");
    }
}
