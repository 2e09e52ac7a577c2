use std::str::FromStr;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumMessage, EnumString, IntoStaticStr, VariantArray};

/// A fixed table of option codes paired with their display labels.
pub trait CodeTable: Sized + Copy + FromStr + VariantArray + 'static {
    fn code(&self) -> &'static str;

    fn label(&self) -> &'static str;

    /// Label for `code`, or `code` itself when the table does not know it.
    fn label_for(code: &str) -> &str {
        match Self::from_str(code) {
            Ok(value) => value.label(),
            Err(_) => code,
        }
    }

    fn is_known(code: &str) -> bool {
        Self::from_str(code).is_ok()
    }

    fn options() -> Vec<CodeOption> {
        Self::VARIANTS
            .iter()
            .map(|value| CodeOption {
                code: value.code(),
                label: value.label(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeOption {
    pub code: &'static str,
    pub label: &'static str,
}

macro_rules! impl_code_table {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl CodeTable for $ty {
                fn code(&self) -> &'static str {
                    self.into()
                }

                fn label(&self) -> &'static str {
                    self.get_message().unwrap_or_else(|| self.code())
                }
            }
        )+
    };
}

#[derive(
    EnumString,
    Display,
    EnumMessage,
    IntoStaticStr,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
pub enum ProjectType {
    #[strum(serialize = "business-website", message = "Business Website")]
    BusinessWebsite,
    #[strum(serialize = "ecommerce", message = "E-commerce Store")]
    Ecommerce,
    #[strum(serialize = "portfolio", message = "Portfolio Website")]
    Portfolio,
    #[strum(serialize = "blog", message = "Blog/Content Site")]
    Blog,
    #[strum(serialize = "custom-application", message = "Custom Web Application")]
    CustomApplication,
    #[strum(serialize = "other", message = "Other")]
    Other,
}

#[derive(
    EnumString,
    Display,
    EnumMessage,
    IntoStaticStr,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
pub enum BudgetRange {
    #[strum(serialize = "under-1000", message = "Under $1,000")]
    Under1000,
    #[strum(serialize = "1000-3000", message = "$1,000 - $3,000")]
    From1000To3000,
    #[strum(serialize = "3000-5000", message = "$3,000 - $5,000")]
    From3000To5000,
    #[strum(serialize = "5000-plus", message = "$5,000+")]
    Over5000,
    #[strum(serialize = "discuss", message = "Let's Discuss")]
    Discuss,
}

#[derive(
    EnumString,
    Display,
    EnumMessage,
    IntoStaticStr,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
pub enum Timeline {
    #[strum(serialize = "asap", message = "ASAP")]
    Asap,
    #[strum(serialize = "1-2-weeks", message = "1-2 Weeks")]
    OneToTwoWeeks,
    #[strum(serialize = "1-month", message = "1 Month")]
    OneMonth,
    #[strum(serialize = "2-3-months", message = "2-3 Months")]
    TwoToThreeMonths,
    #[strum(serialize = "flexible", message = "Flexible")]
    Flexible,
}

#[derive(
    EnumString,
    Display,
    EnumMessage,
    IntoStaticStr,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
pub enum ContactMethod {
    #[default]
    #[strum(serialize = "email", message = "Email")]
    Email,
    #[strum(serialize = "phone", message = "Phone Call")]
    Phone,
    #[strum(serialize = "whatsapp", message = "WhatsApp")]
    WhatsApp,
}

#[derive(
    EnumString,
    Display,
    EnumMessage,
    IntoStaticStr,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
pub enum ContactTime {
    #[strum(serialize = "morning", message = "Morning")]
    Morning,
    #[strum(serialize = "afternoon", message = "Afternoon")]
    Afternoon,
    #[strum(serialize = "evening", message = "Evening")]
    Evening,
    #[default]
    #[strum(serialize = "anytime", message = "Anytime")]
    Anytime,
}

impl_code_table!(ProjectType, BudgetRange, Timeline, ContactMethod, ContactTime);
