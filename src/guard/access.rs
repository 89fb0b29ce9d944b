//! The access decision itself.
//!
//! [`evaluate`] is a pure function: the same snapshot, policy and dashboard
//! map always yield the same outcome and nothing is navigated from here.
//! Issuing redirects is the guards' job.

use crate::guard::{DashboardMap, RoutePolicy};
use crate::session::SessionSnapshot;
use serde::Serialize;
use std::fmt;

/// Outcome of one guard evaluation over a session snapshot.
///
/// Outcomes are terminal for a given snapshot; a changed snapshot simply
/// re-enters evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Access {
    /// Session still resolving; show a loading indicator, never redirect.
    Pending,
    /// The visitor may view the route; render its content.
    Allowed,
    /// Authentication required but nobody is signed in; go to login.
    Unauthenticated { redirect: String },
    /// Signed in but not permitted here; go to the user's own dashboard.
    Forbidden { redirect: String },
}

/// What the wrapping shell should draw for a given outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rendering {
    Spinner,
    Hidden,
    Content,
}

impl Access {
    /// Redirect target carried by the outcome, if any.
    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        match self {
            Access::Pending | Access::Allowed => None,
            Access::Unauthenticated { redirect } | Access::Forbidden { redirect } => {
                Some(redirect)
            }
        }
    }

    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allowed)
    }

    #[must_use]
    pub fn rendering(&self) -> Rendering {
        match self {
            Access::Pending => Rendering::Spinner,
            Access::Allowed => Rendering::Content,
            Access::Unauthenticated { .. } | Access::Forbidden { .. } => Rendering::Hidden,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Pending => f.write_str("pending"),
            Access::Allowed => f.write_str("allowed"),
            Access::Unauthenticated { redirect } => write!(f, "unauthenticated -> {redirect}"),
            Access::Forbidden { redirect } => write!(f, "forbidden -> {redirect}"),
        }
    }
}

/// Evaluates the access decision for one snapshot against one route policy.
#[must_use]
pub fn evaluate(
    snapshot: &SessionSnapshot,
    policy: &RoutePolicy,
    dashboards: &DashboardMap,
) -> Access {
    if snapshot.is_loading {
        return Access::Pending;
    }

    let Some(identity) = snapshot.identity.as_ref() else {
        if policy.require_auth {
            return Access::Unauthenticated {
                redirect: dashboards.login_path().to_string(),
            };
        }
        return Access::Allowed;
    };

    if !policy.allowed_roles.is_empty() && !policy.permits(identity) {
        return Access::Forbidden {
            redirect: dashboards.path_for(&identity.role).to_string(),
        };
    }

    Access::Allowed
}
