// Homestead Explorer - platform/mod.rs
//
// Platform abstraction layer: file access and tool configuration.
// Only homestead-tools uses this layer; the GUI touches no files.

pub mod config;
pub mod fs;
