//! Email/password account creation followed by the profile write.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::Feedback;
use super::messages::{REGISTRATION_SUCCESS, registration_error};
use super::profile::registration_record;
use super::validation::validate_registration;
use crate::net::identity::IdentityClient;
use crate::net::profile_store::ProfileStore;

/// Raw registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Create the account, then write its profile with `merge = false`.
///
/// A failed profile write is logged and the flow still reports success: the
/// account exists and the session is already live.
pub async fn register(
    identity: &dyn IdentityClient,
    profiles: &dyn ProfileStore,
    form: &RegistrationForm,
    created_at: &str,
) -> Feedback {
    if let Err(err) = validate_registration(&form.full_name, &form.email, &form.password) {
        return Feedback::error(err.to_string());
    }

    let email = form.email.trim();
    let user = match identity.sign_up(email, &form.password).await {
        Ok(user) => user,
        Err(err) => {
            log::warn!("sign-up failed: {err}");
            return Feedback::error(registration_error(&err.code));
        }
    };

    let record = registration_record(&user, &form.full_name, email, created_at);
    if let Err(err) = profiles.upsert(&user.uid, &record, false).await {
        log::error!("profile write failed for {}: {err}", user.uid);
    }

    Feedback::success(REGISTRATION_SUCCESS)
}
