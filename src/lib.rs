// logwindow - lib.rs
//
// Data-management core behind a log-viewing dashboard: retrieves paginated
// log pages from a backend, merges them into a deduplicated, time-ordered
// window, and drives bidirectional pagination under filters and an
// optional time anchor.
//
// Rendering, toast display, and backend storage are external
// collaborators; only their contracts appear here.

pub mod app;
pub mod core;
pub mod fetch;
pub mod platform;
pub mod util;
