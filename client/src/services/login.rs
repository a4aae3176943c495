//! Email/password sign-in and password reset.
//!
//! A successful sign-in needs no navigation here: the session change drives
//! the auth gate off `/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::Feedback;
use super::messages::{LOGIN_SUCCESS, PASSWORD_RESET_SENT, login_error, password_reset_error};
use super::validation::{validate_login, validate_reset};
use crate::net::identity::IdentityClient;

pub async fn sign_in(identity: &dyn IdentityClient, email: &str, password: &str) -> Feedback {
    if let Err(err) = validate_login(email, password) {
        return Feedback::error(err.to_string());
    }
    match identity.sign_in(email.trim(), password).await {
        Ok(user) => {
            log::info!("signed in {}", user.uid);
            Feedback::success(LOGIN_SUCCESS)
        }
        Err(err) => {
            log::warn!("sign-in failed: {err}");
            Feedback::error(login_error(&err.code))
        }
    }
}

pub async fn request_password_reset(identity: &dyn IdentityClient, email: &str) -> Feedback {
    if let Err(err) = validate_reset(email) {
        return Feedback::error(err.to_string());
    }
    match identity.send_password_reset(email.trim()).await {
        Ok(()) => Feedback::success(PASSWORD_RESET_SENT),
        Err(err) => {
            log::warn!("password reset failed: {err}");
            Feedback::error(password_reset_error(&err.code))
        }
    }
}
