use crate::cli::actions::Action;
use crate::guard::{evaluate, Access, RoutePolicy};
use crate::session::{Identity, SessionSnapshot};
use anyhow::{bail, Result};
use serde_json::json;
use tracing::debug;

/// Handle the check action: evaluate one decision and print it as JSON.
pub fn handle(action: Action) -> Result<Access> {
    let Action::Check {
        manifest,
        route,
        role,
        approved,
        loading,
    } = action
    else {
        bail!("unexpected action");
    };

    let manifest = super::load_manifest(manifest.as_deref())?;
    let declared = manifest.policy_for(&route).cloned();
    debug!(%route, declared = declared.is_some(), "resolved route policy");

    // Undeclared routes require a signed-in user, nothing more.
    let policy = declared.unwrap_or_else(RoutePolicy::authenticated);

    let snapshot = if loading {
        SessionSnapshot::loading()
    } else {
        match role {
            Some(role) => SessionSnapshot::authenticated(Identity::new(role).with_approved(approved)),
            None => SessionSnapshot::anonymous(),
        }
    };

    let access = evaluate(&snapshot, &policy, &manifest.dashboards);

    let report = json!({
        "route": route,
        "policy": policy,
        "decision": access,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(access)
}
