pub mod emailjs;
mod service;
pub(crate) mod template;

pub use emailjs::{EmailJsConfig, EmailJsDelivery};
pub use service::*;
