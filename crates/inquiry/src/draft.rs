use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{
    BudgetRange, CodeTable, ContactMethod, ContactTime, Error, ProjectType, Result, Timeline,
};

/// The closed set of inquiry form fields.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Phone,
    Company,
    ProjectType,
    BudgetRange,
    Timeline,
    ProjectDescription,
    SpecificRequirements,
    ContactMethod,
    BestTimeToContact,
}

impl Field {
    /// Whether the field holds a code from one of the option tables.
    pub fn is_coded(&self) -> bool {
        matches!(
            self,
            Field::ProjectType
                | Field::BudgetRange
                | Field::Timeline
                | Field::ContactMethod
                | Field::BestTimeToContact
        )
    }

    /// Empty means "unselected" and is accepted for every field.
    pub fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }

        match self {
            Field::ProjectType => ProjectType::is_known(value),
            Field::BudgetRange => BudgetRange::is_known(value),
            Field::Timeline => Timeline::is_known(value),
            Field::ContactMethod => ContactMethod::is_known(value),
            Field::BestTimeToContact => ContactTime::is_known(value),
            _ => true,
        }
    }
}

/// Mutable state of the inquiry form while the user types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryDraft {
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

impl Default for InquiryDraft {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            project_type: String::new(),
            budget_range: String::new(),
            timeline: String::new(),
            project_description: String::new(),
            specific_requirements: String::new(),
            contact_method: ContactMethod::default().code().to_owned(),
            best_time_to_contact: ContactTime::default().code().to_owned(),
        }
    }
}

impl InquiryDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::ProjectType => &self.project_type,
            Field::BudgetRange => &self.budget_range,
            Field::Timeline => &self.timeline,
            Field::ProjectDescription => &self.project_description,
            Field::SpecificRequirements => &self.specific_requirements,
            Field::ContactMethod => &self.contact_method,
            Field::BestTimeToContact => &self.best_time_to_contact,
        }
    }

    /// Sets `field` to `value`. Coded fields only take a code from their
    /// table or the empty string; anything else leaves the draft unchanged.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if !field.accepts(&value) {
            return Err(Error::UnknownCode { field, code: value });
        }

        *self.slot_mut(field) = value;

        Ok(())
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::ProjectType => &mut self.project_type,
            Field::BudgetRange => &mut self.budget_range,
            Field::Timeline => &mut self.timeline,
            Field::ProjectDescription => &mut self.project_description,
            Field::SpecificRequirements => &mut self.specific_requirements,
            Field::ContactMethod => &mut self.contact_method,
            Field::BestTimeToContact => &mut self.best_time_to_contact,
        }
    }
}
