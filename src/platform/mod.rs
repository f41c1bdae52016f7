// logwindow - platform/mod.rs
//
// Platform layer: configuration loading and preference persistence.

pub mod config;
pub mod prefs;
