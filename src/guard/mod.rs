//! Route access guards.
//!
//! Flow Overview: the session provider publishes `{identity, is_loading}`
//! snapshots; a guard binds one route policy to the shared dashboard map and a
//! navigator, re-runs the decision on every snapshot and issues at most one
//! redirect per distinct target. Guards are UX-only gating; real access
//! control must live on the API.

mod access;
mod dashboard;
mod entry;
mod policy;

pub use access::{evaluate, Access, Rendering};
pub use dashboard::{DashboardMap, FALLBACK_PATH, LOGIN_PATH};
pub use entry::EntryRedirect;
pub use policy::RoutePolicy;

use crate::navigate::Navigator;
use crate::session::{SessionSnapshot, SessionState};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Decision procedure for a single protected route.
///
/// Re-observation is idempotent: evaluating the same snapshot twice yields the
/// same outcome and never duplicates the navigation command. A redirect is
/// re-issued only when the decision changes its target.
pub struct RouteGuard<N: Navigator> {
    policy: RoutePolicy,
    dashboards: Arc<DashboardMap>,
    navigator: N,
    last_redirect: Mutex<Option<String>>,
}

impl<N: Navigator> RouteGuard<N> {
    #[must_use]
    pub fn new(policy: RoutePolicy, dashboards: Arc<DashboardMap>, navigator: N) -> Self {
        Self {
            policy,
            dashboards,
            navigator,
            last_redirect: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn policy(&self) -> &RoutePolicy {
        &self.policy
    }

    /// Re-runs the decision for `snapshot`, issuing the redirect when needed.
    pub fn observe(&self, snapshot: &SessionSnapshot) -> Access {
        let access = evaluate(snapshot, &self.policy, &self.dashboards);
        debug!(outcome = %access, "route guard evaluated");

        let mut last = self
            .last_redirect
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        match &access {
            // A pending hold keeps the episode: re-resolving into the same
            // denial must not re-issue the command.
            Access::Pending => {}
            // Rendering content closes the episode; a later denial on the
            // same target is a fresh redirect.
            Access::Allowed => *last = None,
            Access::Unauthenticated { redirect } | Access::Forbidden { redirect } => {
                if last.as_deref() != Some(redirect.as_str()) {
                    *last = Some(redirect.clone());
                    self.navigator.navigate_to(redirect);
                }
            }
        }

        access
    }
}

impl<N: Navigator + 'static> RouteGuard<N> {
    /// Subscribes the guard to `session`; it evaluates immediately and on
    /// every subsequent change.
    pub fn attach(self: &Arc<Self>, session: &SessionState) {
        let guard = Arc::clone(self);
        session.subscribe(move |snapshot| {
            guard.observe(snapshot);
        });
    }
}
