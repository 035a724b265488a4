// oopsleuth - app/mod.rs
//
// Application layer: orchestrates I/O and scanning over the pure core.

pub mod scan;
