//! Source location types for diagnostics about skipped calls.

use std::fmt;

/// Position of a node in a source file. `line` and `col` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path, self.line, self.col)
    }
}

/// Why a call to the translation function produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// `T()`
    MissingArgument,
    /// `T(name)`, `T("a" + b)`, `T(...keys)`, etc.
    NonLiteral,
}

impl UnresolvedReason {
    pub fn message(&self) -> &'static str {
        match self {
            UnresolvedReason::MissingArgument => "translation call has no key argument",
            UnresolvedReason::NonLiteral => "translation key is not a string literal",
        }
    }
}

/// A call to the translation function that was skipped.
///
/// Collected for reporting only; skipped calls never change the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedCall {
    pub location: SourceLocation,
    /// The source code line content for display.
    pub source_line: String,
    pub reason: UnresolvedReason,
}
