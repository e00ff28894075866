use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::ExtractCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_no_files_warning, print_written, report_unresolved};
use crate::config::load_config;
use crate::core::{
    Extractor,
    utils::{resolve_path, scan_files},
};

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let root = &args.common.path;
    let verbose = args.common.verbose;

    let loaded = load_config(root)?;
    if verbose && let Some(path) = &loaded.path {
        eprintln!("{} {}", "Using config".dimmed(), path.display());
    }
    let config = loaded.config;

    let func_name = args.func_name.as_deref().unwrap_or(&config.func_name);
    let strict = args.strict || config.strict;
    let inputs = if cmd.paths.is_empty() {
        &config.includes
    } else {
        &cmd.paths
    };

    let scan = scan_files(
        root,
        inputs,
        &config.ignores,
        config.ignore_test_files,
        verbose,
    );
    if scan.files.is_empty() {
        print_no_files_warning();
    }
    if verbose {
        for file in &scan.files {
            eprintln!("{} {}", "Scanning".dimmed(), file.display());
        }
        if scan.skipped_count > 0 {
            eprintln!(
                "{} {} input path(s) skipped",
                "warning:".bold().yellow(),
                scan.skipped_count
            );
        }
    }

    let mut extractor = Extractor::new(func_name).with_debug(args.debug);
    extractor.analyze_files(&scan.files)?;

    let catalog = extractor.catalog();
    if args.stdout {
        let content = if args.compact {
            let mut out = catalog.to_json()?;
            out.push(b'\n');
            out
        } else {
            catalog.to_json_pretty()?
        };
        io::stdout()
            .lock()
            .write_all(&content)
            .context("Failed to write catalog to stdout")?;
    } else {
        let output = match &args.output {
            Some(path) => resolve_path(root, &path.to_string_lossy()),
            None => resolve_path(root, &config.output),
        };
        catalog.save(&output, !args.compact)?;
        print_written(catalog.len(), extractor.files_analyzed(), &output);
    }

    let unresolved = extractor.unresolved();
    if strict && !unresolved.is_empty() {
        report_unresolved(unresolved, true);
        return Ok(ExitStatus::Failure);
    }
    if verbose {
        report_unresolved(unresolved, false);
    }

    Ok(ExitStatus::Success)
}
