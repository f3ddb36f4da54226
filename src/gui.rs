// Homestead Explorer - gui.rs
//
// Top-level eframe::App implementation. Owns the application state and
// delegates each frame to the UI layer.

use crate::app::state::AppState;
use crate::ui;

/// The Homestead Explorer application.
pub struct ExplorerApp {
    pub state: AppState,
}

impl ExplorerApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::render(ctx, &mut self.state);
    }
}
