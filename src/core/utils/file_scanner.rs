use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;
use crate::core::parsers::is_scannable_file;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Resolve an input or ignore path against `base_dir`.
///
/// Paths under the current directory stay relative so that reported paths
/// read `./src/app.ts` or `src/app.ts` rather than `././src/app.ts`.
pub fn resolve_path(base_dir: &Path, input: &str) -> PathBuf {
    let input = Path::new(input);
    if input.as_os_str().is_empty() || input == Path::new(".") {
        base_dir.to_path_buf()
    } else if base_dir == Path::new(".") {
        input.to_path_buf()
    } else {
        base_dir.join(input)
    }
}

/// Result of scanning files.
pub struct ScanResult {
    /// Files to analyze, in input order. Directory contents are sorted by name.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Expand `inputs` (files, directories or glob patterns, relative to
/// `base_dir`) into the ordered list of files to analyze.
///
/// Files named directly are always kept. Files found by walking a directory
/// or expanding a glob must have a source extension and must not match an
/// ignore pattern. A file reached twice is listed once, at its first position.
pub fn scan_files(
    base_dir: &Path,
    inputs: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(resolve_path(base_dir, p));
        }
    }

    if ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        }
    }

    let is_ignored = |path: &Path| {
        literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
            || glob_patterns
                .iter()
                .any(|p| p.matches(&path.to_string_lossy()))
    };

    let mut push = |path: PathBuf, files: &mut Vec<PathBuf>| {
        if seen.insert(path.clone()) {
            files.push(path);
        }
    };

    for input in inputs {
        let roots: Vec<PathBuf> = if is_glob_pattern(input) {
            let full_pattern = resolve_path(base_dir, input);
            match glob(&full_pattern.to_string_lossy()) {
                Ok(entries) => entries.flatten().collect(),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid glob pattern '{}': {}",
                            "warning:".bold().yellow(),
                            input,
                            e
                        );
                    }
                    continue;
                }
            }
        } else {
            let path = resolve_path(base_dir, input);
            if path.is_file() {
                push(path, &mut files);
                continue;
            }
            if !path.exists() {
                skipped_count += 1;
                if verbose {
                    eprintln!(
                        "{} Input path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
                continue;
            }
            vec![path]
        };

        for root in roots {
            for entry in WalkDir::new(root).sort_by_file_name() {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        skipped_count += 1;
                        if verbose {
                            eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                        }
                        continue;
                    }
                };
                let path = entry.path();

                if is_ignored(path) {
                    continue;
                }

                if path.is_file() && is_scannable_file(path) {
                    push(path.to_path_buf(), &mut files);
                }
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}
