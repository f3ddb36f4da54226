// Homestead Explorer - app/mod.rs
//
// Application layer: owns the scene for the lifetime of the window.
// Dependencies: core layer.
// Must NOT depend on: ui, platform.

pub mod state;
