//! Session state and subscriptions for guards.
//!
//! Flow Overview: the host shell resolves the session (cookie, token refresh,
//! whatever it uses) and pushes the result into [`SessionState`]. The state
//! holds the current snapshot and notifies every observer synchronously on
//! each change, plus once at subscription time so a freshly attached guard
//! evaluates immediately. Only non-sensitive role metadata is kept in memory.
//!
//! A non-loading snapshot with no identity reads as "not signed in"; failures
//! while resolving the session are the host's concern, not this module's.

mod types;

pub use types::{Identity, SessionSnapshot};

use std::sync::{Mutex, PoisonError, RwLock};

type Observer = Box<dyn Fn(&SessionSnapshot) + Send + Sync>;

/// Shared session provider: current snapshot plus observer registry.
///
/// Notifications run on the caller's thread; observers must not block.
pub struct SessionState {
    snapshot: RwLock<SessionSnapshot>,
    observers: Mutex<Vec<Observer>>,
}

impl SessionState {
    /// New session state, starting in the loading phase.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(SessionSnapshot::loading()),
            observers: Mutex::new(Vec::new()),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Registers an observer and invokes it once with the current snapshot.
    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        let current = self.snapshot();
        observer(&current);
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(observer));
    }

    /// Marks the session as resolving again, e.g. during a token refresh.
    pub fn set_loading(&self) {
        self.update(|snapshot| snapshot.is_loading = true);
    }

    /// Stores the resolved identity after login and ends the loading phase.
    pub fn set_session(&self, identity: Identity) {
        self.update(|snapshot| {
            snapshot.identity = Some(identity);
            snapshot.is_loading = false;
        });
    }

    /// Clears the identity, typically on logout; the session counts as resolved.
    pub fn clear_session(&self) {
        self.update(|snapshot| {
            snapshot.identity = None;
            snapshot.is_loading = false;
        });
    }

    fn update(&self, apply: impl FnOnce(&mut SessionSnapshot)) {
        let snapshot = {
            let mut guard = self
                .snapshot
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            apply(&mut guard);
            guard.clone()
        };
        for observer in self
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
        {
            observer(&snapshot);
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
