//! Client-side state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component provides one `RwSignal` per struct here. Each struct is
//! plain data with its own transition methods so it can be tested natively.

pub mod session;
pub mod toast;
pub mod ui;
