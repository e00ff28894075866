//! Key extraction: walk parsed modules and collect translation keys.
//!
//! ## Module Structure
//!
//! - `callee`: reduces a callee expression to its trailing simple name
//! - `key_collector`: the AST visitor that matches calls and extracts keys
//! - `extractor`: the session that owns configuration and accumulated records

pub mod callee;
pub mod extractor;
pub mod key_collector;

pub use callee::{CalleeShape, MAX_DEPTH, resolve_callee};
pub use extractor::{DEFAULT_FUNC_NAME, Extractor, dump_tree};
pub use key_collector::{KeyCollector, literal_key, unquote};
