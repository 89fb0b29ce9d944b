//! Navigation boundary.
//!
//! Redirects are one-shot commands handed to the host shell. The engine never
//! retries or queues them; the last command issued before the next evaluation
//! supersedes any earlier one.

use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Client-side redirect sink, fire-and-forget.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for std::sync::Arc<N> {
    fn navigate_to(&self, path: &str) {
        (**self).navigate_to(path);
    }
}

/// Default navigator: surfaces the redirect as a structured tracing event for
/// the host shell to act on.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate_to(&self, path: &str) {
        info!(%path, "navigate");
    }
}

/// Test double capturing every issued redirect in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    issued: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths issued so far, oldest first.
    #[must_use]
    pub fn issued(&self) -> Vec<String> {
        self.issued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recently issued path.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.issued().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.issued
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
