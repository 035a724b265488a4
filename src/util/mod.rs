// oopsleuth - util/mod.rs
//
// Cross-cutting utilities: errors, constants, logging.

pub mod constants;
pub mod error;
pub mod logging;
