// src/cli.rs

//! CLI argument capture using `clap`.
//!
//! The launcher defines no flags of its own: every argument is collected
//! verbatim and forwarded to the entry point. Help/version handling is
//! disabled so that `pylaunch --help` reaches the entry point instead of
//! being consumed here. A leading literal `--` would be eaten by clap as its
//! end-of-options escape, so `parse()` re-prepends it after parsing;
//! interior `--` tokens are already captured raw by the trailing var-arg.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::ffi::OsString;

use clap::Parser;

/// Command-line arguments for `pylaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pylaunch",
    about = "Launch the CLI entry point inside its provisioned virtualenv.",
    disable_help_flag = true,
    disable_version_flag = true,
    long_about = None
)]
pub struct CliArgs {
    /// Arguments forwarded unmodified to the entry point.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub passthrough: Vec<OsString>,
}

/// Capture the process argv, preserving a leading literal `--`.
pub fn parse() -> CliArgs {
    parse_from(std::env::args_os().collect())
}

fn parse_from(argv: Vec<OsString>) -> CliArgs {
    // argv[0] is the program name; only a `--` in first position is consumed
    // by clap as the end-of-options escape.
    let leading_separator = argv.get(1).is_some_and(|arg| arg == "--");

    let mut args = CliArgs::parse_from(&argv);
    if leading_separator {
        args.passthrough.insert(0, OsString::from("--"));
    }
    args
}
