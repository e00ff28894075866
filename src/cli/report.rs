//! Report formatting and printing utilities.
//!
//! Separate from core logic so msgscan can be used as a library without
//! printing side effects.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::UnresolvedCall;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print skipped translation calls in cargo-style format to stderr.
pub fn report_unresolved(calls: &[UnresolvedCall], as_error: bool) {
    report_unresolved_to(calls, as_error, &mut io::stderr().lock());
}

/// Print skipped translation calls to a custom writer.
pub fn report_unresolved_to<W: Write>(calls: &[UnresolvedCall], as_error: bool, writer: &mut W) {
    if calls.is_empty() {
        return;
    }

    let max_line_width = calls
        .iter()
        .map(|c| c.location.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for call in calls {
        let severity = if as_error {
            "error".bold().red()
        } else {
            "warning".bold().yellow()
        };
        let caret = if as_error { "^".red() } else { "^".yellow() };

        let _ = writeln!(writer, "{}: {}", severity, call.reason.message());
        let _ = writeln!(writer, "  {} {}", "-->".blue(), call.location);

        let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = max_line_width);
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            call.location.line.to_string().blue(),
            "|".blue(),
            call.source_line,
            width = max_line_width
        );
        // `col` counts characters; pad by their display width for CJK and emoji.
        let prefix: String = call
            .source_line
            .chars()
            .take(call.location.col.saturating_sub(1))
            .collect();
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret,
            width = max_line_width,
            padding = UnicodeWidthStr::width(prefix.as_str())
        );
        let _ = writeln!(writer);
    }

    let noun = if calls.len() == 1 { "call" } else { "calls" };
    let _ = writeln!(
        writer,
        "{} {} translation {} skipped (key is not a string literal)",
        if as_error {
            "error:".bold().red()
        } else {
            "warning:".bold().yellow()
        },
        calls.len(),
        noun
    );
}

/// Print the summary line after a catalog was written.
pub fn print_written(keys: usize, files: usize, output: &Path) {
    print_written_to(keys, files, output, &mut io::stdout().lock());
}

pub fn print_written_to<W: Write>(keys: usize, files: usize, output: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} {} -> {}",
            keys,
            if keys == 1 { "key" } else { "keys" },
            files,
            if files == 1 { "file" } else { "files" },
            output.display()
        )
        .green()
    );
}

/// Print a warning when no source files matched the inputs.
pub fn print_no_files_warning() {
    eprintln!(
        "{} no source files found (use {} for details)",
        "warning:".bold().yellow(),
        "-v".cyan()
    );
}
