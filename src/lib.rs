// oopsleuth - lib.rs
//
// Library entry point, exposing all non-CLI modules for integration testing
// and programmatic use (e.g. a report-clustering layer built on the frame
// comparator).

pub mod app;
pub mod core;
pub mod util;

pub use crate::core::compare::compare;
pub use crate::core::model::KernelOopsFrame;
pub use crate::core::parser::parse_frame;
