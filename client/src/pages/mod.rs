//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns form state and delegates backend orchestration to
//! `services`. Gating happens one level up in `app`, so pages assume the
//! visitor is allowed to see them.

pub mod auth_callback;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
