//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Collect translation keys from source files into a JSON catalog
//! - `init`: Initialize a msgscan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by commands that read a project.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root: config lookup starts here and inputs are relative to it
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Name of the translation function to match (overrides config file)
    #[arg(short, long)]
    pub func_name: Option<String>,

    /// Catalog file to write (overrides config file)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the catalog to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Write compact JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,

    /// Report translation calls without a literal key and exit with status 1
    #[arg(long)]
    pub strict: bool,

    /// Dump every parsed syntax tree to stderr
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Files, directories or glob patterns to scan (default: `includes` from config)
    pub paths: Vec<String>,
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translation keys into a JSON catalog
    Extract(ExtractCommand),
    /// Initialize a new .msgscanrc.json configuration file
    Init,
}
