use std::{
    panic::AssertUnwindSafe,
    sync::{
        Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use futures::FutureExt;
use serde::Serialize;

use crate::{DeliveryError, Field, InquiryDraft, InquirySubmitter, Result, ValidationErrors};

/// User-visible result of the latest submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Pending,
    Success,
    Failure(String),
}

#[derive(Debug, Default)]
struct FormState {
    draft: InquiryDraft,
    errors: ValidationErrors,
    outcome: SubmissionOutcome,
}

/// Single-slot guard; the flag is released when the guard drops, panics
/// included.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One form session: owns the draft, its errors and the submission lifecycle.
pub struct FormController {
    submitter: InquirySubmitter,
    state: Mutex<FormState>,
    in_flight: AtomicBool,
}

impl FormController {
    pub fn new(submitter: InquirySubmitter) -> Self {
        Self::with_draft(submitter, InquiryDraft::default())
    }

    pub fn with_draft(submitter: InquirySubmitter, draft: InquiryDraft) -> Self {
        Self {
            submitter,
            state: Mutex::new(FormState {
                draft,
                ..Default::default()
            }),
            in_flight: AtomicBool::new(false),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn draft(&self) -> InquiryDraft {
        self.state().draft.clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.state().errors.clone()
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        self.state().outcome.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Applies one edit. A stale error on the edited field is dropped without
    /// re-running validation.
    pub fn on_field_change(&self, field: Field, value: impl Into<String>) -> Result<()> {
        let mut state = self.state();
        state.draft.set(field, value)?;
        state.errors.clear(field);

        if matches!(
            state.outcome,
            SubmissionOutcome::Success | SubmissionOutcome::Failure(_)
        ) {
            state.outcome = SubmissionOutcome::Idle;
        }

        Ok(())
    }

    /// Validates and sends the current draft. While a submission is in flight
    /// further calls return [`SubmissionOutcome::Pending`] and do nothing.
    pub async fn submit(&self) -> SubmissionOutcome {
        let Some(_in_flight) = InFlight::acquire(&self.in_flight) else {
            tracing::debug!("Inquiry submission already in flight");
            return SubmissionOutcome::Pending;
        };

        let draft = {
            let mut state = self.state();
            state.outcome = SubmissionOutcome::Idle;
            state.errors = crate::validate(&state.draft);

            if !state.errors.is_empty() {
                tracing::debug!(
                    fields = ?state.errors.fields().collect::<Vec<_>>(),
                    "Inquiry rejected by validation"
                );
                return SubmissionOutcome::Idle;
            }

            state.outcome = SubmissionOutcome::Pending;
            state.draft.clone()
        };

        let outcome = match AssertUnwindSafe(self.submitter.send(&draft))
            .catch_unwind()
            .await
        {
            Ok(Ok(())) => SubmissionOutcome::Success,
            Ok(Err(err)) => SubmissionOutcome::Failure(err.to_string()),
            Err(_) => {
                tracing::error!("Inquiry delivery panicked");
                SubmissionOutcome::Failure(DeliveryError::Generic.to_string())
            }
        };

        let mut state = self.state();
        if outcome == SubmissionOutcome::Success {
            state.draft = InquiryDraft::default();
            state.errors = ValidationErrors::default();
        }
        state.outcome = outcome.clone();

        outcome
    }
}
