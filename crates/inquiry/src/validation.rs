use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::{Field, InquiryDraft};

/// Counted in `char`s of the trimmed text, so an emoji counts once.
pub const MIN_DESCRIPTION_LEN: usize = 20;

// One `@`, then a dot somewhere after it. Not RFC 5322.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape pattern must compile")
});

/// Field-scoped error messages. Empty means the draft can be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    /// Removes the error for `field`, if any. Other entries are kept.
    pub fn clear(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_owned());
    }
}

/// Runs every rule against `draft`. Rules are independent: a failing field
/// never hides the result of another.
pub fn validate(draft: &InquiryDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.full_name.trim().is_empty() {
        errors.insert(Field::FullName, "Full name is required");
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_SHAPE.is_match(&draft.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    if draft.phone.trim().is_empty() {
        errors.insert(Field::Phone, "Phone number is required");
    }

    if draft.project_type.is_empty() {
        errors.insert(Field::ProjectType, "Please select a project type");
    }

    if draft.budget_range.is_empty() {
        errors.insert(Field::BudgetRange, "Please select a budget range");
    }

    if draft.timeline.is_empty() {
        errors.insert(Field::Timeline, "Please select a timeline");
    }

    let description = draft.project_description.trim();
    if description.is_empty() {
        errors.insert(Field::ProjectDescription, "Project description is required");
    } else if description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.insert(
            Field::ProjectDescription,
            "Please provide at least 20 characters",
        );
    }

    errors
}
