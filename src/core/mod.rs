//! Core extraction engine.
//!
//! A run has three steps:
//!
//! 1. **Scan**: expand input paths into an ordered list of source files (`utils`)
//! 2. **Parse**: turn each file into an swc AST (`parsers`)
//! 3. **Extract**: walk each AST and collect literal keys into a catalog (`extract`)
//!
//! ## Module Structure
//!
//! - `data`: records, the catalog and diagnostics
//! - `extract`: callee resolution, the key visitor and the `Extractor` session
//! - `parsers`: JavaScript/TypeScript parsing
//! - `utils`: file scanning

pub mod data;
pub mod extract;
pub mod parsers;
pub mod utils;

pub use data::{Catalog, I18nRecord, SourceLocation, UnresolvedCall, UnresolvedReason};
pub use extract::{DEFAULT_FUNC_NAME, Extractor};
