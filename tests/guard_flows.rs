//! End-to-end guard flows: session provider → guard → navigator.
//!
//! Each test wires a [`SessionState`] to a guard over a [`RecordingNavigator`]
//! and drives the session the way a host shell would (resolve, login, logout),
//! asserting both the rendered outcome and the redirects actually issued.

use gardi::{
    Access, DashboardMap, EntryRedirect, Identity, RecordingNavigator, Rendering, Role,
    RouteGuard, RouteManifest, RoutePolicy, SessionSnapshot, SessionState,
};
use std::sync::Arc;

fn guard_over(
    policy: RoutePolicy,
) -> (Arc<RecordingNavigator>, Arc<RouteGuard<Arc<RecordingNavigator>>>) {
    let navigator = Arc::new(RecordingNavigator::new());
    let guard = Arc::new(RouteGuard::new(
        policy,
        Arc::new(DashboardMap::new()),
        Arc::clone(&navigator),
    ));
    (navigator, guard)
}

#[test]
fn anonymous_visitor_on_a_protected_route_lands_on_login() {
    let (navigator, guard) = guard_over(RoutePolicy::allow([Role::Student]));

    let access = guard.observe(&SessionSnapshot::anonymous());

    assert_eq!(
        access,
        Access::Unauthenticated {
            redirect: "/auth/login".to_string()
        }
    );
    assert_eq!(access.rendering(), Rendering::Hidden);
    assert_eq!(navigator.issued(), vec!["/auth/login"]);
}

#[test]
fn member_role_renders_the_content() {
    let (navigator, guard) = guard_over(RoutePolicy::allow([Role::Student, Role::Tutor]));

    let access = guard.observe(&SessionSnapshot::authenticated(Identity::new(Role::Tutor)));

    assert!(access.is_allowed());
    assert_eq!(access.rendering(), Rendering::Content);
    assert!(navigator.issued().is_empty());
}

#[test]
fn approved_role_grants_access_across_the_primary_role() {
    let (navigator, guard) = guard_over(RoutePolicy::allow([Role::Tutor]));
    let identity = Identity::new(Role::Student).with_approved([Role::Tutor]);

    let access = guard.observe(&SessionSnapshot::authenticated(identity));

    assert!(access.is_allowed());
    assert!(navigator.issued().is_empty());
}

#[test]
fn wrong_role_is_sent_to_its_own_dashboard() {
    let (navigator, guard) = guard_over(RoutePolicy::allow([Role::Admin]));

    let access = guard.observe(&SessionSnapshot::authenticated(Identity::new(
        Role::Freelancer,
    )));

    assert_eq!(
        access,
        Access::Forbidden {
            redirect: "/dashboard/freelancer".to_string()
        }
    );
    assert_eq!(navigator.issued(), vec!["/dashboard/freelancer"]);
}

#[test]
fn unknown_role_falls_back_to_the_root_path() {
    let (navigator, guard) = guard_over(RoutePolicy::allow([Role::Admin]));

    let access = guard.observe(&SessionSnapshot::authenticated(Identity::new(Role::from(
        "unknown-role",
    ))));

    assert_eq!(
        access,
        Access::Forbidden {
            redirect: "/".to_string()
        }
    );
    assert_eq!(navigator.issued(), vec!["/"]);
}

#[test]
fn loading_session_always_renders_the_spinner() {
    let (navigator, guard) = guard_over(RoutePolicy::allow([Role::Admin]));

    // Even an identity that would be denied stays pending while loading.
    let snapshot = SessionSnapshot {
        identity: Some(Identity::new(Role::Student)),
        is_loading: true,
    };

    let access = guard.observe(&snapshot);
    assert_eq!(access, Access::Pending);
    assert_eq!(access.rendering(), Rendering::Spinner);
    assert!(navigator.issued().is_empty());
}

#[test]
fn open_route_admits_everyone() {
    let (navigator, guard) = guard_over(RoutePolicy::public());

    assert!(guard.observe(&SessionSnapshot::anonymous()).is_allowed());
    assert!(guard
        .observe(&SessionSnapshot::authenticated(Identity::new(Role::Admin)))
        .is_allowed());
    assert!(navigator.issued().is_empty());
}

#[test]
fn identical_snapshots_never_duplicate_the_redirect() {
    let (navigator, guard) = guard_over(RoutePolicy::allow([Role::Admin]));
    let snapshot = SessionSnapshot::authenticated(Identity::new(Role::Student));

    let first = guard.observe(&snapshot);
    let second = guard.observe(&snapshot);

    assert_eq!(first, second);
    assert_eq!(navigator.issued(), vec!["/dashboard/student"]);
}

#[test]
fn full_login_flow_through_the_session_provider() {
    let (navigator, guard) = guard_over(RoutePolicy::allow([Role::Tutor]));
    let session = SessionState::new();

    // Attaching during the loading phase holds the decision.
    guard.attach(&session);
    assert!(navigator.issued().is_empty());

    // Resolved with nobody signed in: off to login.
    session.clear_session();
    assert_eq!(navigator.issued(), vec!["/auth/login"]);

    // A student logs in: not a tutor, so over to their dashboard.
    session.set_session(Identity::new(Role::Student));
    assert_eq!(
        navigator.issued(),
        vec!["/auth/login", "/dashboard/student"]
    );

    // Tutor approval arrives: allowed, no further navigation.
    session.set_session(Identity::new(Role::Student).with_approved([Role::Tutor]));
    assert_eq!(
        navigator.issued(),
        vec!["/auth/login", "/dashboard/student"]
    );
}

#[test]
fn refresh_cycle_reissues_only_after_the_outcome_changed() {
    let (navigator, guard) = guard_over(RoutePolicy::allow([Role::Admin]));
    let session = SessionState::new();
    guard.attach(&session);

    session.set_session(Identity::new(Role::Student));
    session.set_loading();
    session.set_session(Identity::new(Role::Student));

    // Pending between two identical denials does not re-issue: the target
    // never changed.
    assert_eq!(navigator.issued(), vec!["/dashboard/student"]);
}

#[test]
fn entry_redirect_sends_each_role_home() {
    let navigator = Arc::new(RecordingNavigator::new());
    let entry = Arc::new(EntryRedirect::new(
        Arc::new(DashboardMap::new()),
        Arc::clone(&navigator),
    ));
    let session = SessionState::new();
    entry.attach(&session);

    // Still loading: nothing happens.
    assert!(navigator.issued().is_empty());

    session.set_session(Identity::new(Role::Recruiter));
    assert_eq!(navigator.issued(), vec!["/dashboard/recruiter"]);

    session.clear_session();
    assert_eq!(
        navigator.issued(),
        vec!["/dashboard/recruiter", "/auth/login"]
    );
}

#[test]
fn both_guard_variants_share_one_dashboard_policy() {
    let dashboards = Arc::new(DashboardMap::new().with_fallback_path("/welcome"));

    let route_navigator = Arc::new(RecordingNavigator::new());
    let route_guard = RouteGuard::new(
        RoutePolicy::allow([Role::Admin]),
        Arc::clone(&dashboards),
        Arc::clone(&route_navigator),
    );

    let entry_navigator = Arc::new(RecordingNavigator::new());
    let entry = EntryRedirect::new(Arc::clone(&dashboards), Arc::clone(&entry_navigator));

    let ghost = SessionSnapshot::authenticated(Identity::new(Role::from("ghost")));
    route_guard.observe(&ghost);
    entry.observe(&ghost);

    assert_eq!(route_navigator.issued(), vec!["/welcome"]);
    assert_eq!(entry_navigator.issued(), vec!["/welcome"]);
}

#[test]
fn manifest_policies_drive_guards_end_to_end() {
    let manifest = RouteManifest::from_json(
        r#"{
            "dashboards": {
                "dashboards": {"admin": "/backoffice"},
                "fallback_path": "/home"
            },
            "routes": {
                "/backoffice": {"allowed_roles": ["admin"]},
                "/catalog": {"require_auth": false}
            }
        }"#,
    )
    .unwrap();

    let dashboards = Arc::new(manifest.dashboards.clone());
    let policy = manifest.policy_for("/backoffice/users").cloned().unwrap();

    let navigator = Arc::new(RecordingNavigator::new());
    let guard = RouteGuard::new(policy, dashboards, Arc::clone(&navigator));

    let access = guard.observe(&SessionSnapshot::authenticated(Identity::new(Role::Admin)));
    assert!(access.is_allowed());

    // Student has no dashboard entry in this map: shared fallback applies.
    let access = guard.observe(&SessionSnapshot::authenticated(Identity::new(Role::Student)));
    assert_eq!(
        access,
        Access::Forbidden {
            redirect: "/home".to_string()
        }
    );
    assert_eq!(navigator.issued(), vec!["/home"]);

    assert!(!manifest.policy_for("/catalog").unwrap().require_auth);
}
