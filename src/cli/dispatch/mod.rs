use crate::cli::actions::Action;
use crate::cli::commands::{
    ARG_APPROVED, ARG_LOADING, ARG_MANIFEST, ARG_ROLE, ARG_ROUTE, CMD_CHECK, CMD_ROUTES,
};
use crate::role::Role;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Maps parsed CLI matches onto an action.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let manifest = matches.get_one::<PathBuf>(ARG_MANIFEST).cloned();

    match matches.subcommand() {
        Some((CMD_CHECK, sub)) => Ok(Action::Check {
            manifest,
            route: sub
                .get_one::<String>(ARG_ROUTE)
                .map(ToString::to_string)
                .context("missing required argument: --route")?,
            role: sub
                .get_one::<String>(ARG_ROLE)
                .map(|name| Role::from(name.as_str())),
            approved: sub
                .get_many::<String>(ARG_APPROVED)
                .unwrap_or_default()
                .map(|name| Role::from(name.as_str()))
                .collect(),
            loading: sub.get_flag(ARG_LOADING),
        }),
        Some((CMD_ROUTES, _)) => Ok(Action::Routes { manifest }),
        _ => bail!("missing subcommand"),
    }
}
