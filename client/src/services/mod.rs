//! Account flows behind the login and registration pages.
//!
//! ARCHITECTURE
//! ============
//! Each flow validates input, calls the backend seams and turns the outcome
//! into `Feedback` for the toast stack. Pages stay focused on form state and
//! rendering; everything here runs natively against mock backends in tests.

pub mod federated;
pub mod login;
pub mod messages;
pub mod profile;
pub mod register;
pub mod validation;

#[cfg(test)]
pub(crate) mod mock;

/// User-visible outcome of a flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Error(m) => m,
        }
    }
}
