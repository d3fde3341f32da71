// src/exec.rs

//! Child process execution with exit-code propagation.
//!
//! The interpreter is spawned with stdio fully inherited, so the entry point
//! owns stdin/stdout/stderr for its whole lifetime; the launcher neither
//! buffers nor inspects the streams. The wait is synchronous and the child's
//! exit code becomes the launcher's own.

use std::ffi::OsString;
use std::process::Command;

use anyhow::Context;
use tracing::{debug, info};

use crate::activate::ActivationEnv;
use crate::errors::Result;
use crate::paths::LauncherPaths;

/// Run the interpreter on the entry point with the pass-through arguments.
///
/// The child's argv is exactly `[entry_point] + passthrough`, in order and
/// unmodified. Returns the child's exit code verbatim; a child killed by a
/// signal carries no code and maps to -1, which `std::process::exit` then
/// surfaces as status 255 on unix.
pub fn run_entry_point(
    paths: &LauncherPaths,
    env: &ActivationEnv,
    passthrough: &[OsString],
) -> Result<i32> {
    let mut cmd = Command::new(&paths.interpreter);
    cmd.arg(&paths.entry_point).args(passthrough);
    env.apply(&mut cmd);

    debug!(
        interpreter = %paths.interpreter.display(),
        entry_point = %paths.entry_point.display(),
        passthrough_args = passthrough.len(),
        "spawning entry point"
    );

    let status = cmd
        .status()
        .with_context(|| format!("spawning interpreter {}", paths.interpreter.display()))?;

    let code = status.code().unwrap_or(-1);
    info!(exit_code = code, success = status.success(), "entry point exited");

    Ok(code)
}
