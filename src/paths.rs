// src/paths.rs

//! Path resolution anchored to the launcher's own location.
//!
//! Every path is derived from the directory containing the launcher binary,
//! never from the caller's working directory, so invocation behaves the same
//! no matter where it happens from. Resolution is pure joining; existence is
//! checked later by the run pipeline.
//!
//! Expected layout next to the launcher:
//!
//! ```text
//! <launcher-dir>/
//!   venv/
//!     bin/activate        (Scripts\activate.bat on Windows)
//!     bin/python          (Scripts\python.exe on Windows)
//!   src/cli.py
//! ```

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};

use crate::errors::Result;

const ENV_DIR_NAME: &str = "venv";
const SOURCE_DIR_NAME: &str = "src";
const ENTRY_POINT_FILE: &str = "cli.py";

/// All paths the launcher touches, resolved once per invocation.
#[derive(Debug, Clone)]
pub struct LauncherPaths {
    /// Directory containing the launcher binary.
    pub script_root: PathBuf,
    /// The provisioned virtualenv, `<script_root>/venv`.
    pub env_root: PathBuf,
    /// The venv activation script; its existence is the provisioning gate.
    pub activate_script: PathBuf,
    /// The Python interpreter inside the venv.
    pub interpreter: PathBuf,
    /// The target script handed to the interpreter.
    pub entry_point: PathBuf,
}

impl LauncherPaths {
    /// Resolve all launcher paths from an explicit root directory.
    ///
    /// Pure path joining; cannot fail and performs no I/O.
    pub fn resolve(script_root: &Path) -> Self {
        let env_root = script_root.join(ENV_DIR_NAME);
        let bin_dir = env_bin_dir(&env_root);

        let (activate_name, interpreter_name) = if cfg!(windows) {
            ("activate.bat", "python.exe")
        } else {
            ("activate", "python")
        };

        Self {
            script_root: script_root.to_path_buf(),
            activate_script: bin_dir.join(activate_name),
            interpreter: bin_dir.join(interpreter_name),
            entry_point: script_root.join(SOURCE_DIR_NAME).join(ENTRY_POINT_FILE),
            env_root,
        }
    }
}

/// Directory inside a venv that holds the activation script and interpreter.
pub(crate) fn env_bin_dir(env_root: &Path) -> PathBuf {
    if cfg!(windows) {
        env_root.join("Scripts")
    } else {
        env_root.join("bin")
    }
}

/// Directory containing the launcher executable itself.
///
/// Canonicalized so a launcher reached through a symlink still resolves its
/// environment next to the real binary.
pub fn launcher_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("resolving the launcher's own executable path")?;
    let exe = exe
        .canonicalize()
        .with_context(|| format!("canonicalizing launcher path {}", exe.display()))?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow!("launcher executable {} has no parent directory", exe.display()))?;
    Ok(dir.to_path_buf())
}
