// logwindow - app/mod.rs
//
// Application layer: the pagination controller and its notification seam.

pub mod controller;
pub mod notify;
