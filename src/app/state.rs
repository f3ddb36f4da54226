// Homestead Explorer - app/state.rs
//
// Application state. Holds the scene graph built at startup; widget values
// inside it change as the user interacts, but nothing reads them back.
// Owned by the eframe::App implementation.

use crate::core::layout::{build_window_with, WindowConfig};
use crate::core::scene::SceneRoot;

/// Top-level application state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The window's scene graph, including live widget state.
    pub scene: SceneRoot,
}

impl AppState {
    /// Build state for the default window.
    pub fn new() -> Self {
        Self::with_config(&WindowConfig::default())
    }

    pub fn with_config(config: &WindowConfig) -> Self {
        Self {
            scene: build_window_with(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
