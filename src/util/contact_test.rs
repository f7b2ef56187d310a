use super::*;
use crate::state::toast::ToastKind;

#[test]
fn missing_name_is_rejected_first() {
    let form = ContactSubmission::new("", "a@b.com", "hi");
    assert_eq!(form.validate(), Err(ContactError::MissingField));
}

#[test]
fn missing_field_wins_over_bad_email() {
    let form = ContactSubmission::new("A", "nope", "");
    assert_eq!(form.validate(), Err(ContactError::MissingField));
}

#[test]
fn whitespace_only_field_is_present() {
    let form = ContactSubmission::new("  ", "a@b.com", "hi");
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn malformed_email_is_rejected() {
    let form = ContactSubmission::new("A", "not-an-email", "hi");
    assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
}

#[test]
fn well_formed_submission_passes() {
    let form = ContactSubmission::new("A", "a@b.com", "hi");
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn surrounding_whitespace_on_email_is_rejected() {
    assert_eq!(ContactSubmission::new("A", " a@b.com", "hi").validate(), Err(ContactError::InvalidEmail));
    assert_eq!(ContactSubmission::new("A", "a@b.com ", "hi").validate(), Err(ContactError::InvalidEmail));
}

// =============================================================
// Submit outcome
// =============================================================

#[test]
fn valid_submission_shows_success_and_clears_form() {
    let outcome = ContactSubmission::new("A", "a@b.com", "hi").outcome();
    assert_eq!(outcome.message, SUCCESS_MESSAGE);
    assert_eq!(outcome.kind, ToastKind::Success);
    assert!(outcome.reset_form);
}

#[test]
fn missing_field_shows_error_and_keeps_form() {
    let outcome = ContactSubmission::new("", "a@b.com", "hi").outcome();
    assert_eq!(outcome.message, "Please fill in all fields");
    assert_eq!(outcome.kind, ToastKind::Error);
    assert!(!outcome.reset_form);
}

#[test]
fn bad_email_shows_error_and_keeps_form() {
    let outcome = ContactSubmission::new("A", "not-an-email", "hi").outcome();
    assert_eq!(outcome.message, "Please enter a valid email address");
    assert_eq!(outcome.kind, ToastKind::Error);
    assert!(!outcome.reset_form);
}

#[test]
fn error_text_matches_toasts() {
    assert_eq!(ContactError::MissingField.to_string(), "Please fill in all fields");
    assert_eq!(ContactError::InvalidEmail.to_string(), "Please enter a valid email address");
}

#[test]
fn email_shape_rules() {
    assert!(is_valid_email("jane.doe@mail.example.org"));
    assert!(!is_valid_email("jane@localhost"));
    assert!(!is_valid_email("jane doe@mail.com"));
    assert!(!is_valid_email("@mail.com"));
    assert!(!is_valid_email("jane@@mail.com"));
    assert!(!is_valid_email(""));
}
