// Homestead Explorer - lib.rs
//
// Library entry point, exposing the scene builders, tract data tools, and
// the egui renderer for integration testing and for both binaries.
//
// The eframe `App` wrapper lives in `gui.rs` on the binary side.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
