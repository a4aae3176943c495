use super::*;

// =============================================================
// validate_login
// =============================================================

#[test]
fn login_requires_email_first() {
    assert_eq!(validate_login("", ""), Err(FormError::EmailRequired));
    assert_eq!(validate_login("   ", "secret"), Err(FormError::EmailRequired));
}

#[test]
fn login_requires_password() {
    let err = validate_login("jane@example.com", "").unwrap_err();
    assert_eq!(err, FormError::PasswordRequired);
    assert_eq!(err.to_string(), "Password is required!");
}

#[test]
fn login_does_not_check_password_length() {
    assert!(validate_login("jane@example.com", "x").is_ok());
}

// =============================================================
// validate_registration
// =============================================================

#[test]
fn registration_checks_fields_in_order() {
    assert_eq!(validate_registration("", "", ""), Err(FormError::FullNameRequired));
    assert_eq!(validate_registration("Jane", "", ""), Err(FormError::EmailRequired));
    assert_eq!(validate_registration("Jane", "j@e.com", ""), Err(FormError::PasswordRequired));
    assert_eq!(validate_registration("Jane", "j@e.com", "12345"), Err(FormError::PasswordTooShort));
    assert!(validate_registration("Jane", "j@e.com", "123456").is_ok());
}

#[test]
fn registration_blank_name_is_required() {
    assert_eq!(validate_registration("  \t", "j@e.com", "123456"), Err(FormError::FullNameRequired));
}

#[test]
fn registration_counts_utf16_units_not_bytes() {
    assert_eq!(validate_registration("Jane", "j@e.com", "éééé"), Err(FormError::PasswordTooShort));
    assert!(validate_registration("Jane", "j@e.com", "éééééé").is_ok());
}

#[test]
fn registration_counts_astral_characters_twice() {
    // Three emoji are six UTF-16 units.
    assert!(validate_registration("Jane", "j@e.com", "\u{1F600}\u{1F600}\u{1F600}").is_ok());
    assert_eq!(validate_registration("Jane", "j@e.com", "\u{1F600}\u{1F600}"), Err(FormError::PasswordTooShort));
}

#[test]
fn too_short_message_matches_ui_copy() {
    assert_eq!(FormError::PasswordTooShort.to_string(), "Password must be at least 6 characters!");
    assert_eq!(FormError::FullNameRequired.to_string(), "Full Name is required!");
}

// =============================================================
// validate_reset
// =============================================================

#[test]
fn reset_requires_email() {
    let err = validate_reset(" ").unwrap_err();
    assert_eq!(err.to_string(), "Please enter your email first!");
    assert!(validate_reset("jane@example.com").is_ok());
}
