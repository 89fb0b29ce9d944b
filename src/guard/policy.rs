//! Declared access requirements, one per route.

use crate::role::Role;
use crate::session::Identity;
use serde::{Deserialize, Serialize};

/// Access requirement declared statically for one route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePolicy {
    /// Roles permitted to view the route. Empty means any signed-in user, or
    /// anyone at all when `require_auth` is off.
    #[serde(default)]
    pub allowed_roles: Vec<Role>,
    /// Whether a signed-in identity is required at all.
    #[serde(default = "default_require_auth")]
    pub require_auth: bool,
}

const fn default_require_auth() -> bool {
    true
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self::authenticated()
    }
}

impl RoutePolicy {
    /// Route restricted to the given roles.
    #[must_use]
    pub fn allow<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        Self {
            allowed_roles: roles.into_iter().collect(),
            require_auth: true,
        }
    }

    /// Route open to any signed-in user.
    #[must_use]
    pub fn authenticated() -> Self {
        Self {
            allowed_roles: Vec::new(),
            require_auth: true,
        }
    }

    /// Open route: no authentication, no role restriction.
    #[must_use]
    pub fn public() -> Self {
        Self {
            allowed_roles: Vec::new(),
            require_auth: false,
        }
    }

    /// Whether `role` is a member of the allowed set.
    #[must_use]
    pub fn allows(&self, role: &Role) -> bool {
        self.allowed_roles.contains(role)
    }

    /// Set-intersection access check: passes when the primary role or any
    /// separately approved role is in the allowed set. Order-independent,
    /// case-sensitive on role strings.
    #[must_use]
    pub fn permits(&self, identity: &Identity) -> bool {
        self.allows(&identity.role)
            || identity
                .approved_roles
                .iter()
                .any(|role| self.allows(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_role_membership_permits() {
        let policy = RoutePolicy::allow([Role::Student, Role::Tutor]);
        assert!(policy.permits(&Identity::new(Role::Tutor)));
        assert!(!policy.permits(&Identity::new(Role::Admin)));
    }

    #[test]
    fn approved_role_intersection_permits() {
        let policy = RoutePolicy::allow([Role::Tutor]);
        let identity = Identity::new(Role::Student).with_approved([Role::Tutor]);
        assert!(policy.permits(&identity));

        let disjoint = Identity::new(Role::Student).with_approved([Role::Recruiter]);
        assert!(!disjoint.approved_roles.is_empty());
        assert!(!policy.permits(&disjoint));
    }

    #[test]
    fn membership_is_case_sensitive() {
        let policy = RoutePolicy::allow([Role::from("Student")]);
        assert!(!policy.permits(&Identity::new(Role::Student)));
        assert!(policy.permits(&Identity::new(Role::from("Student"))));
    }

    #[test]
    fn require_auth_defaults_to_true_through_serde() {
        let policy: RoutePolicy = serde_json::from_str(r#"{"allowed_roles":["admin"]}"#).unwrap();
        assert!(policy.require_auth);
        assert_eq!(policy.allowed_roles, vec![Role::Admin]);

        let open: RoutePolicy = serde_json::from_str(r#"{"require_auth":false}"#).unwrap();
        assert!(!open.require_auth);
        assert!(open.allowed_roles.is_empty());
    }
}
