//! Platform roles.
//!
//! Role strings are case-sensitive and compared verbatim. Anything outside the
//! canonical set is carried as [`Role::Other`] so stale or future roles degrade
//! to the fallback dashboard instead of breaking evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user role on the platform.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Student,
    Tutor,
    Freelancer,
    Recruiter,
    Admin,
    /// Unrecognized role string, kept verbatim.
    Other(String),
}

impl Role {
    /// Canonical roles known to the platform.
    pub const KNOWN: [Role; 5] = [
        Role::Student,
        Role::Tutor,
        Role::Freelancer,
        Role::Recruiter,
        Role::Admin,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Role::Student => "student",
            Role::Tutor => "tutor",
            Role::Freelancer => "freelancer",
            Role::Recruiter => "recruiter",
            Role::Admin => "admin",
            Role::Other(name) => name,
        }
    }

    /// Whether this is one of the canonical platform roles.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Other(_))
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "student" => Role::Student,
            "tutor" => Role::Tutor,
            "freelancer" => Role::Freelancer,
            "recruiter" => Role::Recruiter,
            "admin" => Role::Admin,
            _ => Role::Other(name),
        }
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::from(name.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
