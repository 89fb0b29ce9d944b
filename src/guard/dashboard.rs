//! Role → landing-path table shared by every guard variant.

use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default login route.
pub const LOGIN_PATH: &str = "/auth/login";

/// Default landing path for roles without a dashboard entry.
pub const FALLBACK_PATH: &str = "/";

/// Static role → canonical dashboard path map with a fallback for unknown
/// roles. Built once at startup and read-only afterwards; both guard variants
/// share one instance so their redirect policy cannot diverge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardMap {
    dashboards: BTreeMap<Role, String>,
    login_path: String,
    fallback_path: String,
}

impl Default for DashboardMap {
    /// Every canonical role gets `/dashboard/<role>`.
    fn default() -> Self {
        let dashboards = Role::KNOWN
            .iter()
            .map(|role| (role.clone(), format!("/dashboard/{role}")))
            .collect();

        Self {
            dashboards,
            login_path: LOGIN_PATH.to_string(),
            fallback_path: FALLBACK_PATH.to_string(),
        }
    }
}

impl DashboardMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Landing path for `role`. Unmapped roles resolve to the fallback path;
    /// this is deliberate fail-open-to-default, not an error.
    #[must_use]
    pub fn path_for(&self, role: &Role) -> &str {
        self.dashboards
            .get(role)
            .map_or(&self.fallback_path, String::as_str)
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    #[must_use]
    pub fn fallback_path(&self) -> &str {
        &self.fallback_path
    }

    /// Overrides or adds the landing path for one role.
    #[must_use]
    pub fn with_path(mut self, role: Role, path: impl Into<String>) -> Self {
        self.dashboards.insert(role, path.into());
        self
    }

    #[must_use]
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    #[must_use]
    pub fn with_fallback_path(mut self, path: impl Into<String>) -> Self {
        self.fallback_path = path.into();
        self
    }
}
