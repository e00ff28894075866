//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: command handlers (`extract`, `init`)
//! - `exit_status`: process exit codes
//! - `report`: user-facing output

mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

use std::process::ExitCode;

use anyhow::Result;

pub use args::{Arguments, Command, CommonArgs, ExtractArgs, ExtractCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    run::run(args).map(ExitCode::from)
}
