//! Contact form state
//!
//! Holds the three field values and the in-flight flag. Submission is split
//! into `begin_submit` and `finish_submit` so the blocking backend call can
//! run on a worker while the UI keeps drawing.

use crate::model::notification::Notification;
use crate::services::submission::{ContactFormData, SubmitAck, SubmitError};
#[cfg(test)]
use crate::services::submission::ContactSubmitter;
use tracing::{debug, warn};

pub const SUCCESS_TITLE: &str = "Success!";
pub const ERROR_TITLE: &str = "Error";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn all() -> [FormField; 3] {
        [FormField::Name, FormField::Email, FormField::Message]
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Message => "Your Message",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FormField::Message)
    }
}

/// Field values plus the submitting flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    data: ContactFormData,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. No validation, last write wins.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.data.name = value,
            FormField::Email => self.data.email = value,
            FormField::Message => self.data.message = value,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.data.name,
            FormField::Email => &self.data.email,
            FormField::Message => &self.data.message,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// All fields non-empty
    pub fn is_complete(&self) -> bool {
        FormField::all().iter().all(|f| !self.field(*f).is_empty())
    }

    /// Fields that still need a value
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::all()
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect()
    }

    /// Whether the email field looks like `local@domain`
    pub fn has_valid_email(&self) -> bool {
        is_valid_email(&self.data.email)
    }

    /// Raise the submitting flag and snapshot the fields
    ///
    /// Returns `None` when a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactFormData> {
        if self.submitting {
            debug!("Submit ignored, already submitting");
            return None;
        }
        self.submitting = true;
        Some(self.data.clone())
    }

    /// Resolve the in-flight submission
    ///
    /// Success clears every field; failure keeps them so the user can retry.
    /// An acknowledgement with `success == false` counts as a failure.
    pub fn finish_submit(&mut self, outcome: Result<SubmitAck, SubmitError>) -> Notification {
        self.submitting = false;
        match outcome {
            Ok(ack) if ack.success => {
                self.data = ContactFormData::default();
                Notification::new(SUCCESS_TITLE, ack.message)
            }
            Ok(ack) => {
                warn!(message = %ack.message, "Contact submission not accepted");
                Notification::destructive(ERROR_TITLE, FAILURE_MESSAGE)
            }
            Err(err) => {
                warn!(error = %err, "Contact submission failed");
                Notification::destructive(ERROR_TITLE, FAILURE_MESSAGE)
            }
        }
    }

    /// Run a whole submission inline against `submitter`
    ///
    /// Returns `None` if a submission was already in flight.
    #[cfg(test)]
    pub fn submit_with(&mut self, submitter: &dyn ContactSubmitter) -> Option<Notification> {
        let data = self.begin_submit()?;
        let outcome = submitter.submit(&data);
        Some(self.finish_submit(outcome))
    }
}

/// Same shape rule as an HTML `type="email"` input: one `@`, a non-empty
/// local part, dot-separated non-empty domain labels, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}
