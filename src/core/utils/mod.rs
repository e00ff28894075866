//! Utility functions for the extraction pipeline.
//!
//! - `file_scanner`: expands input paths into the list of files to analyze

pub mod file_scanner;

pub use file_scanner::{ScanResult, resolve_path, scan_files};
