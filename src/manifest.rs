//! Declared route policies for the platform.
//!
//! The surrounding application decides which roles may view which route; the
//! manifest gives that declaration one serde-backed form that guards, tooling
//! and tests share. Lookup is exact-match first, then longest declared prefix
//! on a path-segment boundary, so nested pages inherit their section's policy.
//! The root route `/` only ever matches exactly.

use crate::error::Error;
use crate::guard::{DashboardMap, RoutePolicy};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Route table plus the dashboard map the guards share.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteManifest {
    pub dashboards: DashboardMap,
    /// Route path (or section prefix) → declared policy.
    pub routes: BTreeMap<String, RoutePolicy>,
}

impl RouteManifest {
    /// The platform's default route table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut routes = BTreeMap::new();

        routes.insert("/".to_string(), RoutePolicy::public());
        routes.insert("/auth".to_string(), RoutePolicy::public());
        routes.insert("/courses".to_string(), RoutePolicy::public());
        routes.insert(
            "/courses/create".to_string(),
            RoutePolicy::allow([Role::Tutor, Role::Admin]),
        );
        routes.insert(
            "/sessions/live".to_string(),
            RoutePolicy::allow([Role::Student, Role::Tutor]),
        );
        routes.insert(
            "/jobs".to_string(),
            RoutePolicy::allow([Role::Freelancer, Role::Recruiter]),
        );
        routes.insert("/jobs/post".to_string(), RoutePolicy::allow([Role::Recruiter]));
        routes.insert("/payments".to_string(), RoutePolicy::authenticated());
        routes.insert("/referrals".to_string(), RoutePolicy::authenticated());
        routes.insert("/certificates".to_string(), RoutePolicy::authenticated());

        for role in Role::KNOWN {
            routes.insert(
                format!("/dashboard/{role}"),
                RoutePolicy::allow([role.clone()]),
            );
        }

        Self {
            dashboards: DashboardMap::new(),
            routes,
        }
    }

    /// Parses a manifest from JSON.
    ///
    /// # Errors
    /// Returns an error for malformed JSON or route patterns not rooted at `/`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Loads a manifest from a JSON file.
    ///
    /// # Errors
    /// Returns an error when the file cannot be read or fails [`Self::from_json`].
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::ManifestRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), Error> {
        for pattern in self.routes.keys() {
            if !pattern.starts_with('/') {
                return Err(Error::InvalidRoutePattern(pattern.clone()));
            }
        }
        Ok(())
    }

    /// Declared policy for `path`, or `None` when no declaration covers it.
    /// Callers treat undeclared routes as requiring authentication.
    #[must_use]
    pub fn policy_for(&self, path: &str) -> Option<&RoutePolicy> {
        if let Some(policy) = self.routes.get(path) {
            return Some(policy);
        }

        self.routes
            .iter()
            .filter(|(pattern, _)| prefix_matches(pattern, path))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, policy)| policy)
    }
}

/// `/dashboard` covers `/dashboard/tutor` but not `/dashboards`. The root
/// pattern never acts as a prefix.
fn prefix_matches(pattern: &str, path: &str) -> bool {
    if pattern == "/" {
        return false;
    }
    path.strip_prefix(pattern)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
