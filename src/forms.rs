//! Contact and newsletter form validation.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{CONTACT_SUCCESS, NEWSLETTER_SUCCESS};

/// `local@domain.tld`: no whitespace, exactly one `@`, at least one dot after it.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex"));

/// Validation failures. The display text is shown verbatim to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message with at least 10 characters")]
    MessageTooShort,
}

/// Which submit handler a form gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Generic contact form: email plus optional textarea, reset on success.
    Contact,
    /// Newsletter signup: email only, the email field is cleared on success.
    Newsletter,
}

impl FormKind {
    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Contact => CONTACT_SUCCESS,
            Self::Newsletter => NEWSLETTER_SUCCESS,
        }
    }
}

/// Handler for a plain `<form>`. Forms that are, or sit inside, the
/// `.newsletter` element belong to the newsletter handler alone, so a submit
/// never reaches both.
#[must_use]
pub fn generic_form_kind(in_newsletter: bool) -> Option<FormKind> {
    if in_newsletter { None } else { Some(FormKind::Contact) }
}

/// Field values read from a form at submit time. `None` means the field is
/// absent from the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub email: Option<String>,
    pub message: Option<String>,
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a submission. The email is checked first; the message only
/// matters for contact forms that carry a textarea. Message length is counted
/// in UTF-16 code units, the unit the browser reports for field values.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn validate(kind: FormKind, fields: &FormFields, min_message_len: usize) -> Result<(), ValidationError> {
    let email = fields.email.as_deref().unwrap_or_default();
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if kind == FormKind::Contact {
        if let Some(message) = fields.message.as_deref() {
            if message.trim().encode_utf16().count() < min_message_len {
                return Err(ValidationError::MessageTooShort);
            }
        }
    }
    Ok(())
}
