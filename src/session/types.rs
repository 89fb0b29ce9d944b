//! Session payload types used to hydrate guard state. This mirrors
//! cookie-backed session state and contains no secrets.

use crate::role::Role;
use serde::{Deserialize, Serialize};

/// The signed-in user's role assignment as resolved by the session layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Primary role the account was created with.
    pub role: Role,
    /// Roles the user has been separately approved for, e.g. a student who is
    /// also an approved tutor.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub approved_roles: Vec<Role>,
}

impl Identity {
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self {
            role,
            approved_roles: Vec::new(),
        }
    }

    /// Adds separately approved roles.
    #[must_use]
    pub fn with_approved<I>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        self.approved_roles.extend(roles);
        self
    }
}

/// Immutable view of the session for one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub identity: Option<Identity>,
    pub is_loading: bool,
}

impl SessionSnapshot {
    /// Session still resolving; guards hold their decision.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            identity: None,
            is_loading: true,
        }
    }

    /// Resolved session with nobody signed in.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            identity: None,
            is_loading: false,
        }
    }

    /// Resolved session for a signed-in user.
    #[must_use]
    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            is_loading: false,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

impl Default for SessionSnapshot {
    /// Sessions start unresolved.
    fn default() -> Self {
        Self::loading()
    }
}
