//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and the auth gate while reading/writing
//! shared state from Leptos context providers.

pub mod auth_gate;
pub mod google_button;
pub mod loading;
pub mod side_panel;
pub mod toast_stack;
