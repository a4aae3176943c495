//! Shared DTOs for the identity and profile backends.
//!
//! DESIGN
//! ======
//! `Identity` is what the identity provider tells us about the signed-in user;
//! `ProfileRecord` is what we persist about them. The record is always keyed by
//! the identity's `uid`, which is the only cross-entity rule we enforce.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned unique user id.
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl Identity {
    /// Email for display, falling back to a guest label.
    #[must_use]
    pub fn email_label(&self) -> &str {
        self.email.as_deref().filter(|e| !e.is_empty()).unwrap_or("Guest User")
    }
}

/// A user's profile document (`users/{uid}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    /// Always equal to the owning identity's uid.
    pub uid: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Avatar URL; empty when none is known.
    pub img: String,
    /// RFC 3339 creation timestamp. Only written on registration so merges keep
    /// the original value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ProfileRecord {
    /// Document fields in write order. `createdAt` is only present when set.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("uid", self.uid.as_str()),
            ("email", self.email.as_str()),
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("img", self.img.as_str()),
        ];
        if let Some(created_at) = &self.created_at {
            fields.push(("createdAt", created_at.as_str()));
        }
        fields
    }

    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields().into_iter().map(|(name, _)| name).collect()
    }
}
