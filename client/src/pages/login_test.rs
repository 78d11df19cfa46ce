use super::*;

#[test]
fn validate_credentials_trims_email_and_keeps_password() {
    assert_eq!(
        validate_credentials("  a@b.com  ", " pw "),
        Ok(("a@b.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(
        validate_credentials("   ", ""),
        Err(FieldErrors { email: Some(EMAIL_REQUIRED), password: Some(PASSWORD_REQUIRED) })
    );
}

#[test]
fn validate_credentials_flags_bad_email_shape() {
    assert_eq!(
        validate_credentials("not-an-email", "pw"),
        Err(FieldErrors { email: Some(EMAIL_INVALID), password: None })
    );
}

#[test]
fn looks_like_email_accepts_common_shapes() {
    for value in ["a@b.com", "first.last@mail.example.org", "x+tag@sub.domain.io"] {
        assert!(looks_like_email(value), "expected valid: {value:?}");
    }
}

#[test]
fn looks_like_email_rejects_malformed_values() {
    for value in ["a@b", "@b.com", "a@.com", "a@b.", "a b@c.com", "ab.com"] {
        assert!(!looks_like_email(value), "expected invalid: {value:?}");
    }
}

#[test]
fn field_errors_default_is_empty() {
    assert!(FieldErrors::default().is_empty());
    assert!(!FieldErrors { email: Some(EMAIL_REQUIRED), password: None }.is_empty());
}
