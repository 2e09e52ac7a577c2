use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use techfolks_inquiry::{DeliveryRoute, Recipient};
use techfolks_notification::{EmailConfig, EmailJsConfig};
use validator::Validate;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Log the payload and report success
    #[default]
    Log,
    EmailJs,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    pub recipient_name: String,
    pub recipient_email: String,
}

impl DeliveryConfig {
    pub fn route(&self) -> DeliveryRoute {
        DeliveryRoute {
            service_id: self.service_id.to_owned(),
            template_id: self.template_id.to_owned(),
            public_key: self.public_key.to_owned(),
        }
    }

    pub fn recipient(&self) -> Recipient {
        Recipient {
            name: self.recipient_name.to_owned(),
            email: self.recipient_email.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON output instead of the pretty console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (TECHFOLKS__DELIVERY__PUBLIC_KEY, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("delivery.provider", "log")?
            .set_default("delivery.recipient_name", "Techfolks Team")?
            .set_default("delivery.recipient_email", "techfolksweb@gmail.com")?
            .set_default("email.smtp_host", "localhost")?
            .set_default("email.smtp_port", 1025)?
            .set_default("email.from_address", "Techfolks <noreply@techfolks.localhost>")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: missing files are ignored
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("TECHFOLKS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        self.delivery
            .recipient()
            .validate()
            .map_err(|e| format!("Invalid delivery recipient: {e}"))?;

        if self.delivery.provider == Provider::EmailJs {
            self.delivery
                .route()
                .validate()
                .map_err(|e| format!("EmailJS provider needs service_id, template_id and public_key: {e}"))?;
        }

        Ok(())
    }
}
