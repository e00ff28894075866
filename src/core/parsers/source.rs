use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::Program;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax, error::Error};

/// File extensions the parser understands.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts", "cts"];

pub struct ParsedSource {
    pub program: Program,
    pub source_map: Arc<SourceMap>,
}

pub fn is_scannable_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Pick the parser syntax from the file extension.
///
/// `.ts`, `.mts` and `.cts` are parsed without JSX so `<T>value` casts keep
/// working. Unknown extensions fall back to TSX, the most permissive mode.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    let ext = Path::new(file_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match ext {
        "js" | "jsx" | "mjs" | "cjs" => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        "ts" | "mts" | "cts" => Syntax::Typescript(TsSyntax::default()),
        _ => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
    }
}

/// How a file's top level is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Always an ES module: strict mode, `import`/`export` allowed.
    Module,
    /// Always a sloppy-mode script (CommonJS).
    Script,
    /// A script unless the file contains `import` or `export`.
    Auto,
}

pub fn source_kind_for_path(file_path: &str) -> SourceKind {
    match Path::new(file_path).extension().and_then(|ext| ext.to_str()) {
        Some("mjs" | "mts") => SourceKind::Module,
        Some("cjs") => SourceKind::Script,
        _ => SourceKind::Auto,
    }
}

/// Parse a source string into an AST.
///
/// Any syntax error fails the whole file, including errors the swc parser
/// would otherwise recover from. Accepts a shared SourceMap so files can be
/// parsed in parallel.
pub fn parse_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let program = match source_kind_for_path(file_path) {
            SourceKind::Module => parser.parse_module().map(Program::Module),
            SourceKind::Script => parser.parse_script().map(Program::Script),
            SourceKind::Auto => parser.parse_program(),
        }
        .map_err(|e| parse_error(file_path, &source_map, &e))?;

        if let Some(e) = parser.take_errors().first() {
            return Err(parse_error(file_path, &source_map, e));
        }

        Ok(ParsedSource {
            program,
            source_map,
        })
    })
}

fn parse_error(file_path: &str, source_map: &SourceMap, error: &Error) -> anyhow::Error {
    let loc = source_map.lookup_char_pos(error.span().lo);
    anyhow!(
        "Failed to parse {}:{}:{}: {}",
        file_path,
        loc.line,
        loc.col.0 + 1,
        error.kind().msg()
    )
}
