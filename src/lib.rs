//! msgscan - translation key extractor
//!
//! msgscan statically scans JavaScript and TypeScript sources for calls to a
//! translation function (`T` by default) and collects the literal key of each
//! call into a JSON catalog of `{"id": ..., "translation": ""}` records.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, key extraction and the catalog

pub mod cli;
pub mod config;
pub mod core;
