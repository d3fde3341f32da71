// src/lib.rs

pub mod activate;
pub mod cli;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod paths;

use std::ffi::OsString;
use std::path::Path;

use tracing::debug;

use crate::activate::ActivationEnv;
use crate::errors::{LauncherError, Result};
use crate::paths::LauncherPaths;

/// High-level entry point used by `main.rs`.
///
/// Anchors the pipeline at the launcher's own installed location, never the
/// caller's working directory.
pub fn run(passthrough: &[OsString]) -> Result<i32> {
    let script_root = paths::launcher_dir()?;
    run_from(&script_root, passthrough)
}

/// The launcher pipeline, anchored at an explicit root directory.
///
/// Strictly sequential, every failure terminal:
/// 1. resolve all paths by pure joining
/// 2. gate on the activation script's existence
/// 3. derive the activation environment
/// 4. gate on the interpreter, then the entry point, independently
/// 5. exec and forward the child's exit code
pub fn run_from(script_root: &Path, passthrough: &[OsString]) -> Result<i32> {
    let paths = LauncherPaths::resolve(script_root);
    debug!(script_root = %paths.script_root.display(), "resolved launcher paths");

    if !paths.activate_script.is_file() {
        return Err(LauncherError::EnvironmentNotProvisioned(
            paths.activate_script.clone(),
        ));
    }

    let env = ActivationEnv::for_environment(&paths)?;

    if !paths.interpreter.is_file() {
        return Err(LauncherError::InterpreterMissing(paths.interpreter.clone()));
    }
    if !paths.entry_point.is_file() {
        return Err(LauncherError::EntryPointMissing(paths.entry_point.clone()));
    }

    exec::run_entry_point(&paths, &env, passthrough)
}
