// oopsleuth - core/mod.rs
//
// Core business logic layer: frame model, parser, comparator, formatter,
// and the filter/export helpers built on them.
// Must NOT depend on: app, or any I/O beyond `Write` trait objects.

pub mod compare;
pub mod export;
pub mod filter;
pub mod format;
pub mod model;
pub mod parser;
