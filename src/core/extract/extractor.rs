use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use rayon::prelude::*;
use swc_common::SourceMap;
use swc_ecma_ast::Program;

use super::KeyCollector;
use crate::core::data::{Catalog, I18nRecord, UnresolvedCall};
use crate::core::parsers::{ParsedSource, parse_source};

/// Function name matched when none is configured.
pub const DEFAULT_FUNC_NAME: &str = "T";

/// An extraction session.
///
/// Records accumulate across every file analyzed by the same extractor, in
/// the order their keys were first seen. Separate extractors never share
/// state.
///
/// ```ignore
/// let mut extractor = Extractor::new("T");
/// extractor.analyze_files(&["src/app.tsx", "src/nav.tsx"])?;
/// extractor.save_json(Path::new("i18n.json"))?;
/// ```
pub struct Extractor {
    func_name: String,
    debug: bool,
    catalog: Catalog,
    unresolved: Vec<UnresolvedCall>,
    source_map: Arc<SourceMap>,
    files_analyzed: usize,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(DEFAULT_FUNC_NAME)
    }
}

impl Extractor {
    /// Create an extractor matching calls to `func_name`.
    ///
    /// An empty name falls back to [`DEFAULT_FUNC_NAME`].
    pub fn new(func_name: impl Into<String>) -> Self {
        let func_name = func_name.into();
        let func_name = if func_name.is_empty() {
            DEFAULT_FUNC_NAME.to_string()
        } else {
            func_name
        };

        Self {
            func_name,
            debug: false,
            catalog: Catalog::new(),
            unresolved: Vec::new(),
            source_map: Arc::default(),
            files_analyzed: 0,
        }
    }

    /// Dump every parsed syntax tree to stderr. Records are unaffected.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn func_name(&self) -> &str {
        &self.func_name
    }

    pub fn records(&self) -> &[I18nRecord] {
        self.catalog.records()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Translation calls skipped because their key was not a string literal.
    pub fn unresolved(&self) -> &[UnresolvedCall] {
        &self.unresolved
    }

    pub fn files_analyzed(&self) -> usize {
        self.files_analyzed
    }

    /// Analyze in-memory source text. `file_path` picks the syntax and is
    /// used in error messages.
    pub fn analyze_source(&mut self, code: String, file_path: &str) -> Result<&[I18nRecord]> {
        let parsed = parse_source(code, file_path, self.source_map.clone())?;
        self.walk(&parsed, file_path);
        Ok(self.records())
    }

    pub fn analyze_file(&mut self, path: &Path) -> Result<&[I18nRecord]> {
        let parsed = read_and_parse(path, self.source_map.clone())?;
        self.walk(&parsed, &path.to_string_lossy());
        Ok(self.records())
    }

    /// Analyze files in the given order.
    ///
    /// Files are parsed in parallel but walked one by one in input order, so
    /// record order matches a sequential run. The first file (in input order)
    /// that fails to parse aborts the run before it or any later file is
    /// walked.
    pub fn analyze_files<P>(&mut self, paths: &[P]) -> Result<&[I18nRecord]>
    where
        P: AsRef<Path> + Sync,
    {
        let source_map = &self.source_map;
        let parsed: Vec<Result<ParsedSource>> = paths
            .par_iter()
            .map(|path| read_and_parse(path.as_ref(), source_map.clone()))
            .collect();

        for (path, result) in paths.iter().zip(parsed) {
            let parsed = result?;
            self.walk(&parsed, &path.as_ref().to_string_lossy());
        }

        Ok(self.records())
    }

    /// Serialize the records collected so far to compact JSON.
    pub fn dump_json(&self) -> Result<Vec<u8>> {
        self.catalog.to_json()
    }

    /// Write the records collected so far to `path` as compact JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        self.catalog.save(path, false)
    }

    fn walk(&mut self, parsed: &ParsedSource, file_path: &str) {
        if self.debug {
            eprintln!("{}", dump_tree(&parsed.program));
        }

        KeyCollector::new(
            &self.func_name,
            file_path,
            &parsed.source_map,
            &mut self.catalog,
            &mut self.unresolved,
        )
        .collect(&parsed.program);

        self.files_analyzed += 1;
    }
}

fn read_and_parse(path: &Path, source_map: Arc<SourceMap>) -> Result<ParsedSource> {
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    parse_source(code, &path.to_string_lossy(), source_map)
}

/// Render a syntax tree for debugging.
pub fn dump_tree(program: &Program) -> String {
    format!("{program:#?}")
}
