//! User-facing copy for identity-provider error codes, per flow.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::identity::AuthErrorCode;

#[must_use]
pub fn registration_error(code: &AuthErrorCode) -> &'static str {
    match code {
        AuthErrorCode::EmailAlreadyInUse => "Email already registered. Please login instead.",
        AuthErrorCode::InvalidEmail => "Invalid email format!",
        AuthErrorCode::WeakPassword => "Password is too weak. Use at least 6 characters.",
        AuthErrorCode::OperationNotAllowed => "Email registration is not enabled!",
        _ => "Registration failed. Please try again.",
    }
}

#[must_use]
pub fn login_error(code: &AuthErrorCode) -> &'static str {
    match code {
        AuthErrorCode::InvalidEmail => "Invalid email format!",
        AuthErrorCode::UserNotFound => "User not found. Please register first!",
        AuthErrorCode::WrongPassword => "Incorrect password!",
        AuthErrorCode::TooManyRequests => "Too many failed attempts. Try again later!",
        AuthErrorCode::InvalidCredential => "Invalid email or password!",
        AuthErrorCode::UserDisabled => "This account has been disabled!",
        _ => "Login failed. Please try again.",
    }
}

#[must_use]
pub fn password_reset_error(code: &AuthErrorCode) -> &'static str {
    match code {
        AuthErrorCode::UserNotFound => "No account found with this email!",
        AuthErrorCode::InvalidEmail => "Invalid email format!",
        _ => "Failed to send reset email. Please try again.",
    }
}

pub const REGISTRATION_SUCCESS: &str = "Registration successful!";
pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const PASSWORD_RESET_SENT: &str = "Password reset email sent! Check your inbox.";
pub const POPUP_BLOCKED: &str = "Popup blocked. Please allow popups and try again.";
