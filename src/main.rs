use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use msgscan::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match msgscan::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
