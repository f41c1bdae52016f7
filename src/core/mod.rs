// logwindow - core/mod.rs
//
// Core layer: pure merge-and-pagination logic.
// No I/O, no rendering, no platform dependencies.

pub mod anchor;
pub mod filter;
pub mod merge;
pub mod model;
pub mod query;
