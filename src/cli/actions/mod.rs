pub mod check;
pub mod routes;

use crate::manifest::RouteManifest;
use crate::role::Role;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Parsed CLI action.
#[derive(Debug)]
pub enum Action {
    Check {
        manifest: Option<PathBuf>,
        route: String,
        role: Option<Role>,
        approved: Vec<Role>,
        loading: bool,
    },
    Routes {
        manifest: Option<PathBuf>,
    },
}

/// Loads the manifest file, or the built-in route table when none was given.
pub(crate) fn load_manifest(path: Option<&Path>) -> Result<RouteManifest> {
    match path {
        Some(path) => RouteManifest::from_file(path)
            .with_context(|| format!("loading route manifest from {}", path.display())),
        None => Ok(RouteManifest::builtin()),
    }
}
