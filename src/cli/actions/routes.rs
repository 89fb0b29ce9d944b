use crate::cli::actions::Action;
use anyhow::{bail, Result};

/// Handle the routes action: print the declared route table.
pub fn handle(action: Action) -> Result<()> {
    let Action::Routes { manifest } = action else {
        bail!("unexpected action");
    };

    let manifest = super::load_manifest(manifest.as_deref())?;

    for (pattern, policy) in &manifest.routes {
        let auth = if policy.require_auth { "auth" } else { "open" };
        let roles = if policy.allowed_roles.is_empty() {
            "any".to_string()
        } else {
            policy
                .allowed_roles
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        };
        println!("{pattern:<24} {auth:<5} {roles}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_the_builtin_table() {
        assert!(handle(Action::Routes { manifest: None }).is_ok());
    }

    #[test]
    fn check_action_is_rejected() {
        let action = Action::Check {
            manifest: None,
            route: "/".to_string(),
            role: None,
            approved: Vec::new(),
            loading: false,
        };
        assert!(handle(action).is_err());
    }
}
