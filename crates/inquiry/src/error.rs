use crate::Field;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("unknown code `{code}` for {field}")]
    UnknownCode { field: Field, code: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Delivery failures as shown to the person filling the form. The technical
/// cause stays in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("Email template issue. Please contact us directly at techfolksweb@gmail.com")]
    Template,

    #[error(
        "Email service configuration issue. Please contact us directly at techfolksweb@gmail.com"
    )]
    Service,

    #[error("Email authentication issue. Please contact us directly at techfolksweb@gmail.com")]
    Authentication,

    #[error("Network connection issue. Please check your internet and try again.")]
    Network,

    #[error("Failed to send inquiry. Please try again or contact us directly.")]
    Generic,
}

impl DeliveryError {
    /// Maps a collaborator's error text to a failure kind. First match wins.
    pub fn classify(message: &str) -> Self {
        let message = message.to_lowercase();

        if message.contains("template") {
            Self::Template
        } else if message.contains("service") || message.contains("invalid service id") {
            Self::Service
        } else if message.contains("public key") || message.contains("invalid public key") {
            Self::Authentication
        } else if message.contains("network") || message.contains("fetch") {
            Self::Network
        } else {
            Self::Generic
        }
    }

    /// Configuration failures need an operator; the user is pointed at the
    /// published contact channel instead of retrying.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Template | Self::Service | Self::Authentication)
    }
}
