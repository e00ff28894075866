//! Core data types produced by extraction.
//!
//! ## Module Structure
//!
//! - `record`: `I18nRecord`, one catalog entry
//! - `catalog`: `Catalog`, the ordered deduplicated record collection and its JSON form
//! - `source`: source positions and skipped-call diagnostics

pub mod catalog;
pub mod record;
pub mod source;

pub use catalog::Catalog;
pub use record::I18nRecord;
pub use source::{SourceLocation, UnresolvedCall, UnresolvedReason};
