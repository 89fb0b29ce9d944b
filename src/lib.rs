//! # Gardi (Route Access Guard Engine)
//!
//! `gardi` decides, for each route of a multi-role learning and freelance
//! marketplace (students, tutors, freelancers, recruiters, admins), whether
//! the current session may see the route's content, whether a loading state
//! should show instead, and where the visitor must be redirected otherwise.
//!
//! ## Decision model
//!
//! Every evaluation starts from a [`session::SessionSnapshot`] and one
//! [`guard::RoutePolicy`] and ends in exactly one outcome:
//!
//! - `Pending`: the session is still resolving; show a loading indicator.
//! - `Allowed`: the visitor may view the route; render its content.
//! - `Unauthenticated`: sign-in required; redirect to the login route.
//! - `Forbidden`: signed in but not permitted; redirect to the visitor's own
//!   dashboard per the shared [`guard::DashboardMap`].
//!
//! The access check passes when the identity's primary role, or any role it
//! has been separately approved for, is in the route's allowed set. Unknown
//! roles never fail the lookup; they land on the fallback path.
//!
//! ## Collaborators
//!
//! The session provider ([`session::SessionState`]) and the redirect sink
//! ([`navigate::Navigator`]) are injected; the engine itself performs no I/O
//! beyond handing one-shot navigation commands to the sink. Guards are
//! UX-only gating; real access control must live on the API.

pub mod cli;
pub mod error;
pub mod guard;
pub mod manifest;
pub mod navigate;
pub mod role;
pub mod session;

pub use error::Error;
pub use guard::{evaluate, Access, DashboardMap, EntryRedirect, Rendering, RouteGuard, RoutePolicy};
pub use manifest::RouteManifest;
pub use navigate::{Navigator, RecordingNavigator, TracingNavigator};
pub use role::Role;
pub use session::{Identity, SessionSnapshot, SessionState};
