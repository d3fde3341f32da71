// src/errors.rs

//! Crate-wide error taxonomy.
//!
//! Every variant is terminal: the launcher reports it and exits 1. The
//! underlying cause is distinguished by the message text only, never by a
//! distinct exit code.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error(
        "activation script not found at {0}; expected a provisioned virtualenv \
         ('venv') next to the launcher"
    )]
    EnvironmentNotProvisioned(PathBuf),

    #[error("failed to activate virtualenv at {env_root}: {message}")]
    ActivationFailed { env_root: PathBuf, message: String },

    #[error("interpreter not found at {0}")]
    InterpreterMissing(PathBuf),

    #[error("entry point not found at {0}")]
    EntryPointMissing(PathBuf),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LauncherError>;
