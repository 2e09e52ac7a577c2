//! Shared router fixtures

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use techfolks_inquiry::{Delivery, DeliveryRoute, InquiryPayload, InquirySubmitter, Recipient};
use tower::ServiceExt;

/// Records payloads; fails with `error` when set.
#[derive(Default)]
pub struct StubDelivery {
    pub error: Option<String>,
    pub payloads: Mutex<Vec<InquiryPayload>>,
}

impl StubDelivery {
    pub fn failing(error: &str) -> Self {
        Self {
            error: Some(error.to_owned()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Delivery for StubDelivery {
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

pub fn app(delivery: Arc<StubDelivery>) -> Router {
    let submitter = InquirySubmitter::new(
        DeliveryRoute {
            service_id: "service_test".to_owned(),
            template_id: "template_test".to_owned(),
            public_key: "public_test".to_owned(),
        },
        Recipient {
            name: "Techfolks Team".to_owned(),
            email: "team@techfolks.localhost".to_owned(),
        },
        delivery,
    )
    .expect("test recipient is valid");

    techfolks::create_app(submitter)
}

pub fn valid_inquiry() -> Value {
    serde_json::json!({
        "fullName": "Ann Lee",
        "email": "ann@x.com",
        "phone": "555-1111",
        "projectType": "ecommerce",
        "budgetRange": "1000-3000",
        "timeline": "asap",
        "projectDescription": "Need a 20+ character description here.",
    })
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (u16, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn get_json(app: Router, uri: &str) -> (u16, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (u16, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
