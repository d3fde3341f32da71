// src/activate.rs

//! Computed virtualenv activation.
//!
//! The launcher never sources `venv/bin/activate` into its own process.
//! Instead it derives the equivalent environment explicitly and merges it
//! into the child spawn: `VIRTUAL_ENV` pointing at the venv, the venv's bin
//! directory prepended to `PATH`, and `PYTHONHOME` removed. The effect stays
//! local to the child, so two launchers running at once cannot interfere
//! with each other.

use std::env;
use std::ffi::OsString;
use std::process::Command;

use crate::errors::{LauncherError, Result};
use crate::paths::{LauncherPaths, env_bin_dir};

/// Environment mutations that stand in for sourcing the activation script.
#[derive(Debug, Clone, Default)]
pub struct ActivationEnv {
    /// Variables to set on the child, in order.
    pub set: Vec<(OsString, OsString)>,
    /// Variables to remove from the child's inherited environment.
    pub unset: Vec<OsString>,
}

impl ActivationEnv {
    /// Derive the activation environment for a resolved launcher layout.
    ///
    /// The venv root is canonicalized first so `VIRTUAL_ENV` and the `PATH`
    /// entry agree even when the install sits behind a symlink. Any failure
    /// here is an activation failure: the artifact existed at the gate but
    /// the context could not be built.
    pub fn for_environment(paths: &LauncherPaths) -> Result<Self> {
        Self::compute(paths, env::var_os("PATH"))
    }

    fn compute(paths: &LauncherPaths, inherited_path: Option<OsString>) -> Result<Self> {
        let env_root =
            paths
                .env_root
                .canonicalize()
                .map_err(|e| LauncherError::ActivationFailed {
                    env_root: paths.env_root.clone(),
                    message: e.to_string(),
                })?;
        let bin_dir = env_bin_dir(&env_root);

        let mut search_path = vec![bin_dir];
        if let Some(existing) = &inherited_path {
            search_path.extend(env::split_paths(existing));
        }
        let path_value =
            env::join_paths(search_path).map_err(|e| LauncherError::ActivationFailed {
                env_root: env_root.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            set: vec![
                (OsString::from("VIRTUAL_ENV"), env_root.into_os_string()),
                (OsString::from("PATH"), path_value),
            ],
            unset: vec![OsString::from("PYTHONHOME")],
        })
    }

    /// Apply the activation to a child command before it is spawned.
    pub fn apply(&self, cmd: &mut Command) {
        for (name, value) in &self.set {
            cmd.env(name, value);
        }
        for name in &self.unset {
            cmd.env_remove(name);
        }
    }
}
