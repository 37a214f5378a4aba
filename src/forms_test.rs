use super::*;

fn fields(email: &str, message: Option<&str>) -> FormFields {
    FormFields { email: Some(email.to_owned()), message: message.map(str::to_owned) }
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_ordinary_addresses() {
    for email in ["a@b.co", "first.last@example.com", "x+tag@sub.domain.org", "ü@ñ.de"] {
        assert!(is_valid_email(email), "{email} should be valid");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in [
        "",
        "plain",
        "@example.com",
        "user@",
        "user@example",
        "user@.",
        "user@example.",
        "us er@example.com",
        "user@exa mple.com",
        "a@b@c.com",
        " user@example.com",
    ] {
        assert!(!is_valid_email(email), "{email:?} should be invalid");
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn invalid_email_wins_over_short_message() {
    let result = validate(FormKind::Contact, &fields("nope", Some("hi")), 10);
    assert_eq!(result, Err(ValidationError::InvalidEmail));
}

#[test]
fn short_message_rejected_with_valid_email() {
    let result = validate(FormKind::Contact, &fields("a@b.co", Some("   too short   ")), 10);
    assert_eq!(result, Err(ValidationError::MessageTooShort));
}

#[test]
fn message_length_is_measured_after_trim() {
    assert_eq!(
        validate(FormKind::Contact, &fields("a@b.co", Some("  123456789  ")), 10),
        Err(ValidationError::MessageTooShort)
    );
    assert_eq!(validate(FormKind::Contact, &fields("a@b.co", Some("  1234567890  ")), 10), Ok(()));
}

#[test]
fn contact_without_textarea_needs_only_email() {
    assert_eq!(validate(FormKind::Contact, &fields("a@b.co", None), 10), Ok(()));
}

#[test]
fn newsletter_ignores_message() {
    assert_eq!(validate(FormKind::Newsletter, &fields("a@b.co", Some("x")), 10), Ok(()));
}

#[test]
fn missing_email_is_invalid() {
    let result = validate(FormKind::Newsletter, &FormFields::default(), 10);
    assert_eq!(result, Err(ValidationError::InvalidEmail));
}

#[test]
fn error_text_is_user_facing() {
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address");
    assert_eq!(
        ValidationError::MessageTooShort.to_string(),
        "Please enter a message with at least 10 characters"
    );
}

#[test]
fn success_messages_per_kind() {
    assert_eq!(FormKind::Contact.success_message(), "Thank you! We'll get back to you soon.");
    assert_eq!(FormKind::Newsletter.success_message(), "Successfully subscribed to newsletter!");
}

#[test]
fn message_length_counts_utf16_units() {
    // Each emoji is two UTF-16 units, so five of them reach the minimum.
    assert_eq!(validate(FormKind::Contact, &fields("a@b.co", Some("💰💰💰💰💰")), 10), Ok(()));
    assert_eq!(
        validate(FormKind::Contact, &fields("a@b.co", Some("💰💰💰💰")), 10),
        Err(ValidationError::MessageTooShort)
    );
    assert_eq!(
        validate(FormKind::Contact, &fields("a@b.co", Some("ééééééééé")), 10),
        Err(ValidationError::MessageTooShort)
    );
}

#[test]
fn email_pattern_compiles() {
    assert!(EMAIL_RE.is_match("a@b.co"));
}

// =============================================================
// Handler routing
// =============================================================

#[test]
fn plain_forms_get_the_contact_handler() {
    assert_eq!(generic_form_kind(false), Some(FormKind::Contact));
}

#[test]
fn forms_in_newsletter_get_no_generic_handler() {
    assert_eq!(generic_form_kind(true), None);
}
