//! Source file parsers.
//!
//! - `source`: JavaScript/TypeScript parser (uses swc for AST generation)

pub mod source;

pub use source::{
    ParsedSource, SourceKind, is_scannable_file, parse_source, source_kind_for_path, syntax_for_path,
};
