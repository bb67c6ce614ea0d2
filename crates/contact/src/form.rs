//! Form session state for the contact form.
//!
//! The controller owns what the visitor typed, which fields they have left at
//! least once, and the current validation result. It never loses input on a
//! failed submission and always discards it after a confirmed one.

use std::collections::BTreeSet;

use strum::VariantArray;

use crate::{ContactSubmission, Field, Transport, TransportError, ValidationResult, validate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight.
    Ignored,
    /// Honeypot filled: nothing sent, nothing shown.
    Suppressed,
    /// At least one field failed; all errors are now visible.
    Invalid,
    Sent,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
    values: ContactSubmission,
    touched: BTreeSet<Field>,
    errors: ValidationResult,
    failure: Option<String>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from values that were entered elsewhere, e.g. a plain
    /// HTML form post.
    pub fn with_values(values: ContactSubmission) -> Self {
        Self {
            values,
            ..Default::default()
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn values(&self) -> &ContactSubmission {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Message the transport reported for the last failed submission.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error to display next to `field`: only once the visitor has left it.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if !self.is_touched(field) {
            return None;
        }

        self.errors.get(field)
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);

        if matches!(self.state, FormState::Error | FormState::Success) {
            self.state = FormState::Idle;
            self.failure = None;
        }

        if self.is_touched(field) {
            self.errors = validate(&self.values);
        }
    }

    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
        self.errors = validate(&self.values);
    }

    /// First half of a submission attempt.
    ///
    /// Returns the payload to send and moves to [`FormState::Submitting`], or
    /// the outcome that stopped the attempt before any request.
    pub fn begin_submit(
        &mut self,
        page_uri: Option<String>,
    ) -> Result<ContactSubmission, SubmitOutcome> {
        if self.state == FormState::Submitting {
            return Err(SubmitOutcome::Ignored);
        }

        if self.values.is_flagged() {
            return Err(SubmitOutcome::Suppressed);
        }

        self.state = FormState::Idle;
        self.failure = None;
        self.touched.extend(Field::VARIANTS.iter().copied());
        self.errors = validate(&self.values);

        if !self.errors.is_valid() {
            return Err(SubmitOutcome::Invalid);
        }

        self.state = FormState::Submitting;

        Ok(ContactSubmission {
            page_uri,
            ..self.values.clone()
        })
    }

    /// Second half of a submission attempt, fed with the transport result.
    pub fn finish(&mut self, result: Result<(), TransportError>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                self.state = FormState::Success;
                self.values = ContactSubmission::default();
                self.touched.clear();
                self.errors = ValidationResult::default();

                SubmitOutcome::Sent
            }
            Err(err) => {
                tracing::warn!(err = %err, "contact submission failed");
                self.state = FormState::Error;
                self.failure = err.message().map(str::to_owned);

                SubmitOutcome::Failed
            }
        }
    }

    pub async fn submit<T: Transport + ?Sized>(
        &mut self,
        transport: &T,
        page_uri: Option<String>,
    ) -> SubmitOutcome {
        let payload = match self.begin_submit(page_uri) {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };

        let result = transport.send(&payload).await;

        self.finish(result)
    }
}
