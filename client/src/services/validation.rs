//! Client-side form validation. Runs before any network call and stops at
//! the first failing field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const MIN_PASSWORD_LEN: usize = 6;

/// A form field that blocks submission. `Display` is the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Full Name is required!")]
    FullNameRequired,
    #[error("Email is required!")]
    EmailRequired,
    #[error("Password is required!")]
    PasswordRequired,
    #[error("Password must be at least 6 characters!")]
    PasswordTooShort,
    #[error("Please enter your email first!")]
    ResetEmailRequired,
}

/// Login: email, then password.
///
/// # Errors
///
/// Returns the first missing field.
pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    if email.trim().is_empty() {
        return Err(FormError::EmailRequired);
    }
    if password.is_empty() {
        return Err(FormError::PasswordRequired);
    }
    Ok(())
}

/// Registration: full name, email, password, password length.
///
/// # Errors
///
/// Returns the first failing check.
pub fn validate_registration(full_name: &str, email: &str, password: &str) -> Result<(), FormError> {
    if full_name.trim().is_empty() {
        return Err(FormError::FullNameRequired);
    }
    if email.trim().is_empty() {
        return Err(FormError::EmailRequired);
    }
    if password.is_empty() {
        return Err(FormError::PasswordRequired);
    }
    // Counted in UTF-16 code units, the same unit the identity backend uses.
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    Ok(())
}

/// Password reset needs an email.
///
/// # Errors
///
/// Returns `ResetEmailRequired` for a blank email.
pub fn validate_reset(email: &str) -> Result<(), FormError> {
    if email.trim().is_empty() {
        return Err(FormError::ResetEmailRequired);
    }
    Ok(())
}
