//! Building profile records from sign-up input or a federated identity.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{Identity, ProfileRecord};

/// Split a full name on single spaces: first token is the first name, second
/// token the last name, anything after is dropped. Missing tokens are empty.
#[must_use]
pub fn split_full_name(full_name: &str) -> (String, String) {
    let mut parts = full_name.trim().split(' ');
    let first = parts.next().unwrap_or_default().to_owned();
    let last = parts.next().unwrap_or_default().to_owned();
    (first, last)
}

/// Record written right after email/password sign-up.
#[must_use]
pub fn registration_record(identity: &Identity, full_name: &str, email: &str, created_at: &str) -> ProfileRecord {
    let (first_name, last_name) = split_full_name(full_name);
    ProfileRecord {
        uid: identity.uid.clone(),
        email: identity.email.clone().unwrap_or_else(|| email.to_owned()),
        first_name,
        last_name,
        img: String::new(),
        created_at: Some(created_at.to_owned()),
    }
}

/// Record merged in after a federated sign-in. Leaves `createdAt` alone.
#[must_use]
pub fn federated_record(identity: &Identity) -> ProfileRecord {
    let (first_name, last_name) = split_full_name(identity.display_name.as_deref().unwrap_or_default());
    ProfileRecord {
        uid: identity.uid.clone(),
        email: identity.email.clone().unwrap_or_default(),
        first_name,
        last_name,
        img: identity.photo_url.clone().unwrap_or_default(),
        created_at: None,
    }
}
