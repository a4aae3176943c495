//! Tri-state session model and the process-wide session hub.
//!
//! DESIGN
//! ======
//! `Session` is a tagged variant so "still loading but already has a user"
//! cannot be represented. `SessionHub` wraps a `tokio::sync::watch` channel:
//! latest-value semantics, no backlog, and every new subscriber first sees the
//! current value. The identity client owns the only hub and publishes into it;
//! the root component holds the only subscription and fans it out through a
//! reactive signal.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use tokio::sync::watch;

use crate::net::types::Identity;

/// Observed authentication status of the current visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// The identity provider has not resolved the persisted session yet.
    #[default]
    Unknown,
    /// Resolved, nobody is signed in.
    Absent,
    /// Resolved, a user is signed in.
    Present(Identity),
}

impl Session {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Present(identity) => Some(identity),
            Self::Unknown | Self::Absent => None,
        }
    }
}

/// Latest-value session publisher shared by the identity client.
#[derive(Clone, Debug)]
pub struct SessionHub {
    tx: Arc<watch::Sender<Session>>,
}

impl Default for SessionHub {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionHub {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Session::Unknown);
        Self { tx: Arc::new(tx) }
    }

    /// Replace the current session. Returns `false` (and wakes nobody) when
    /// the value is unchanged.
    pub fn publish(&self, next: Session) -> bool {
        self.tx.send_if_modified(move |current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        })
    }

    /// Open a subscription. Dropping the receiver unsubscribes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    #[must_use]
    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Deliver the current session, then every change, to `sink` until the
/// publisher goes away.
pub async fn forward_sessions<F>(mut rx: watch::Receiver<Session>, mut sink: F)
where
    F: FnMut(Session),
{
    let initial = rx.borrow_and_update().clone();
    sink(initial);
    while rx.changed().await.is_ok() {
        let next = rx.borrow_and_update().clone();
        sink(next);
    }
}
