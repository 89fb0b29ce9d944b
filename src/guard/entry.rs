//! Entry-page redirect: the lighter guard variant for login and landing pages.
//!
//! Signed-in visitors are sent to their own dashboard, anonymous visitors to
//! login. Only the primary role picks the dashboard here; approved roles never
//! change where a user lands. Shares the [`DashboardMap`] (and therefore the
//! fallback policy) with [`RouteGuard`](crate::guard::RouteGuard).

use crate::guard::DashboardMap;
use crate::navigate::Navigator;
use crate::session::{SessionSnapshot, SessionState};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Redirect-only guard for entry pages.
pub struct EntryRedirect<N: Navigator> {
    dashboards: Arc<DashboardMap>,
    navigator: N,
    last_redirect: Mutex<Option<String>>,
}

impl<N: Navigator> EntryRedirect<N> {
    #[must_use]
    pub fn new(dashboards: Arc<DashboardMap>, navigator: N) -> Self {
        Self {
            dashboards,
            navigator,
            last_redirect: Mutex::new(None),
        }
    }

    /// Computes the entry redirect for `snapshot` and issues it when the
    /// target changed since the last observation. Returns the target, or
    /// `None` while the session is still resolving.
    pub fn observe(&self, snapshot: &SessionSnapshot) -> Option<String> {
        if snapshot.is_loading {
            return None;
        }

        let target = match snapshot.identity.as_ref() {
            Some(identity) => self.dashboards.path_for(&identity.role),
            None => self.dashboards.login_path(),
        };

        let mut last = self
            .last_redirect
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if last.as_deref() != Some(target) {
            debug!(%target, "entry redirect");
            *last = Some(target.to_string());
            self.navigator.navigate_to(target);
        }

        Some(target.to_string())
    }
}

impl<N: Navigator + 'static> EntryRedirect<N> {
    /// Subscribes the redirect to `session`; it runs immediately and on every
    /// subsequent change.
    pub fn attach(self: &Arc<Self>, session: &SessionState) {
        let entry = Arc::clone(self);
        session.subscribe(move |snapshot| {
            entry.observe(snapshot);
        });
    }
}
