use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default `.msgscanrc.json` to the working directory.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists, remove it first to regenerate", CONFIG_FILE_NAME);
    }

    let content = default_config_json()?;
    fs::write(config_path, content + "\n")
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {CONFIG_FILE_NAME}").green()
    );

    Ok(ExitStatus::Success)
}
