//! Inquiry delivery through the EmailJS REST API

use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use techfolks_inquiry::{Delivery, DeliveryRoute, InquiryPayload};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Private key, only needed when the account enforces it for API calls.
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            access_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Extra names the dashboard templates read each canonical field under.
const ALIASES: &[(&str, &[&str])] = &[
    ("from_name", &["name", "client_name", "user_name", "fullName"]),
    ("from_email", &["email", "client_email", "user_email"]),
    ("phone", &["client_phone"]),
    ("company", &["client_company"]),
    ("project_type", &["projectType"]),
    ("budget_range", &["budget", "budgetRange"]),
    ("timeline", &["projectTimeline"]),
    (
        "project_description",
        &["message", "projectDescription", "description"],
    ),
    (
        "specific_requirements",
        &["requirements", "specificRequirements"],
    ),
    ("contact_method", &["contactMethod"]),
    ("best_time", &["bestTime"]),
    ("inquiry_date", &["inquiryDate"]),
    ("inquiry_time", &["inquiryTime"]),
];

/// Canonical payload fields plus their aliases.
pub fn template_params(payload: &InquiryPayload) -> Map<String, Value> {
    let mut params: Map<String, Value> = payload
        .fields()
        .into_iter()
        .map(|(key, value)| (key.to_owned(), Value::from(value)))
        .collect();

    for (canonical, aliases) in ALIASES {
        let Some(value) = params.get(*canonical).cloned() else {
            continue;
        };

        for alias in *aliases {
            params.insert((*alias).to_owned(), value.clone());
        }
    }

    params
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: Map<String, Value>,
}

#[derive(Clone)]
pub struct EmailJsDelivery {
    client: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl EmailJsDelivery {
    pub fn new(config: &EmailJsConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build EmailJS HTTP client")?;

        tracing::info!(
            endpoint = %config.endpoint,
            timeout_secs = config.timeout_secs,
            "EmailJS delivery initialized"
        );

        Ok(Self {
            client,
            endpoint: config.endpoint.to_owned(),
            access_token: Some(config.access_token.to_owned()).filter(|token| !token.is_empty()),
        })
    }
}

#[async_trait::async_trait]
impl Delivery for EmailJsDelivery {
    #[tracing::instrument(skip_all, fields(service_id = %route.service_id, template_id = %route.template_id))]
    async fn deliver(&self, route: &DeliveryRoute, payload: &InquiryPayload) -> anyhow::Result<()> {
        let request = SendRequest {
            service_id: &route.service_id,
            template_id: &route.template_id,
            user_id: &route.public_key,
            access_token: self.access_token.as_deref(),
            template_params: template_params(payload),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("Network request to EmailJS failed")?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), "EmailJS accepted inquiry");
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();

        // Status code only: reason phrases such as "Service Unavailable" would
        // skew classification.
        anyhow::bail!(
            "EmailJS rejected the request with status {}: {}",
            status.as_u16(),
            text.trim()
        )
    }
}
