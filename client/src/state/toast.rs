//! Toast notification stack.
//!
//! Success and error toasts close themselves after [`AUTO_CLOSE_MS`]; loading
//! toasts stay until the flow that opened them dismisses them.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use crate::services::Feedback;

pub const AUTO_CLOSE_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Loading,
}

impl ToastKind {
    #[must_use]
    pub fn auto_closes(self) -> bool {
        !matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Loading => "toast toast--loading",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Ordered toasts, oldest first. Ids are never reused.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, text: text.into() });
        id
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, text)
    }

    pub fn loading(&mut self, text: impl Into<String>) -> u64 {
        self.push(ToastKind::Loading, text)
    }

    pub fn feedback(&mut self, feedback: &Feedback) -> u64 {
        match feedback {
            Feedback::Success(text) => self.success(text.clone()),
            Feedback::Error(text) => self.error(text.clone()),
        }
    }

    /// Returns whether a toast was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}
