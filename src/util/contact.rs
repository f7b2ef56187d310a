//! Contact form validation.
//!
//! Nothing is transmitted; a valid submission is only acknowledged with a
//! toast. Validation stops at the first failure, missing fields first.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::toast::ToastKind;

/// Message shown after a valid submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Why a submission was rejected. `Display` is the toast text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Values read from the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), message: message.into() }
    }

    /// Check required fields, then the email shape.
    ///
    /// Values are checked as entered: a field of spaces is present, and an
    /// email with surrounding spaces fails the shape check.
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingField`] or [`ContactError::InvalidEmail`].
    pub fn validate(&self) -> Result<(), ContactError> {
        if [&self.name, &self.email, &self.message].iter().any(|f| f.is_empty()) {
            return Err(ContactError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// What the page does with this submission: which toast to show and
    /// whether to clear the form.
    #[must_use]
    pub fn outcome(&self) -> SubmitOutcome {
        match self.validate() {
            Ok(()) => SubmitOutcome { message: SUCCESS_MESSAGE.to_owned(), kind: ToastKind::Success, reset_form: true },
            Err(e) => SubmitOutcome { message: e.to_string(), kind: ToastKind::Error, reset_form: false },
        }
    }
}

/// Result of submitting the contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub message: String,
    pub kind: ToastKind,
    /// Only a valid submission clears the fields.
    pub reset_form: bool,
}

/// `local@domain.tld`-shaped: no whitespace, one `@`, a dot after it.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}
